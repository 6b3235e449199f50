fn main() {
    taskflow_web::run_app();
}
