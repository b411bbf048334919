use tracing::debug;

/// Builds the greetings served under `/hello-world`.
#[derive(Clone, Debug, Default)]
pub struct HelloWorldService;

impl HelloWorldService {
    pub fn new() -> Self {
        HelloWorldService
    }

    pub fn hello_world(&self, name: &str) -> String {
        debug!(name, "Building greeting");
        format!("Hello World {}", name)
    }

    /// Greeting echoed back for a posted user payload.
    pub fn hello_world_for(&self, name: &str, id: &str, filter: &str) -> String {
        format!("{} id: {} filter: {}", self.hello_world(name), id, filter)
    }
}
