use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Three men's morris HTTP backend
#[derive(Parser, Debug, Clone)]
#[command(name = "morris", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3002)]
    pub port: u16,

    /// Directory served for any path that is not an API route
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["morris"]).unwrap();
        if std::env::var("PORT").is_err() {
            assert_eq!(config.port, 3002);
        }
        if std::env::var("STATIC_DIR").is_err() {
            assert_eq!(config.static_dir, PathBuf::from("public"));
        }
    }

    #[test]
    fn test_flags_override() {
        let config = ServerConfig::try_parse_from([
            "morris",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--static-dir",
            "web",
        ])
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("web"));
    }
}
