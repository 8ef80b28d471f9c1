#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Expose the toolkit over the Model Context Protocol")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Serve newline-delimited JSON-RPC over stdin/stdout
    #[clap(name = "stdio")]
    Stdio,

    /// Serve JSON-RPC over HTTP with an SSE endpoint
    #[clap(name = "sse")]
    Sse(SseOptions),

    /// Print the tools the server exposes
    #[clap(name = "tools")]
    Tools,
}

#[derive(Debug, clap::Args)]
pub struct SseOptions {
    /// Port to listen on
    #[arg(short, long, env = "DEVTOOLKIT_MCP_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "DEVTOOLKIT_MCP_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

impl SseOptions {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
