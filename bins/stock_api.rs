fn main() -> std::process::ExitCode {
    server::launch(server::ServiceKind::Stocks)
}
