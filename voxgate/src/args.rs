use std::{net::IpAddr, path::PathBuf};

use clap::Parser;
use voxgate_config::{Config, LogFormat};

/// HTTP gateway for the Piper text-to-speech engine
#[derive(Debug, Parser)]
#[command(name = "voxgate", about = "HTTP gateway for the Piper text-to-speech engine")]
pub struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "VOXGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the Piper executable
    #[arg(long, env = "PIPER_BIN")]
    pub piper_bin: Option<PathBuf>,

    /// Path to the Piper voice model
    #[arg(long, env = "PIPER_MODEL")]
    pub model: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PIPER_PORT")]
    pub port: Option<u16>,

    /// Address to bind on
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Log output format (text or json)
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Log filter directive
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,
}

impl Args {
    /// Build the effective configuration
    ///
    /// Defaults are overridden by the config file, which is overridden by
    /// environment variables and command line flags.
    pub fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(binary_path) = self.piper_bin {
            config.engine.binary_path = binary_path;
        }
        if let Some(model_path) = self.model {
            config.engine.model_path = model_path;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(format) = self.log_format {
            config.telemetry.format = format;
        }
        if let Some(filter) = self.log_filter {
            config.telemetry.filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const ENV_VARS: [&str; 5] = ["VOXGATE_CONFIG", "PIPER_BIN", "PIPER_MODEL", "PIPER_PORT", "RUST_LOG"];

    fn parse(args: &[&str]) -> Config {
        Args::try_parse_from(std::iter::once("voxgate").chain(args.iter().copied()))
            .unwrap()
            .into_config()
            .unwrap()
    }

    #[test]
    fn defaults_without_env() {
        temp_env::with_vars_unset(ENV_VARS, || {
            let config = parse(&[]);
            assert_eq!(config.engine.binary_path, Path::new("/usr/local/bin/piper"));
            assert_eq!(config.engine.model_path, Path::new("/models/de_DE-thorsten-medium.onnx"));
            assert_eq!(config.server.listen_address().to_string(), "0.0.0.0:8082");
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        temp_env::with_vars_unset(ENV_VARS, || {
            let vars = [
                ("PIPER_BIN", Some("/opt/piper/piper")),
                ("PIPER_MODEL", Some("/opt/voices/en_US-amy-low.onnx")),
                ("PIPER_PORT", Some("9100")),
            ];
            temp_env::with_vars(vars, || {
                let config = parse(&[]);
                assert_eq!(config.engine.binary_path, Path::new("/opt/piper/piper"));
                assert_eq!(config.engine.model_name(), "en_US-amy-low.onnx");
                assert_eq!(config.server.port, 9100);
            });
        });
    }

    #[test]
    fn flags_override_environment() {
        temp_env::with_vars_unset(ENV_VARS, || {
            temp_env::with_var("PIPER_PORT", Some("9100"), || {
                let config = parse(&["--port", "9200", "--host", "127.0.0.1", "--log-format", "json"]);
                assert_eq!(config.server.listen_address().to_string(), "127.0.0.1:9200");
                assert_eq!(config.telemetry.format, LogFormat::Json);
            });
        });
    }

    #[test]
    fn invalid_port_is_rejected() {
        temp_env::with_vars_unset(ENV_VARS, || {
            temp_env::with_var("PIPER_PORT", Some("eighty"), || {
                assert!(Args::try_parse_from(["voxgate"]).is_err());
            });
        });
    }
}
