use oar_risk_lib::Host;
use std::io::Write;

/// Test host that captures output to in-memory buffers.
pub struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

impl TestHost {
    pub const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

/// Run the CLI with `--color never` and return the host.
pub fn run(args: &[&str]) -> TestHost {
    let mut host = TestHost::new();
    let argv = ["oar-risk", "--color", "never"].iter().chain(args).copied();
    oar_risk_lib::run(&mut host, argv);
    host
}
