fn main() {
    prompt_sensei_lib::run()
}
