/// Executes a system command and captures its standard output.
///
/// Implemented by the real-process adapter in production and by scripted
/// fakes in tests. Implementations decide their own timeout policy; the
/// contract is only "return lines or fail".
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> anyhow::Result<Vec<String>>;
}
