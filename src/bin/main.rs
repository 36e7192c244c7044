fn main() {
  varpad::main();
}
