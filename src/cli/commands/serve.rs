//! Web server command.

use std::net::Ipv6Addr;

use console::style;

use crate::config::Settings;

/// Port used when the bind address names only a host.
const DEFAULT_PORT: u16 = 8501;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind);

    println!(
        "{} Starting lensocr at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!(
        "  Model {} at {}",
        style(&settings.llm.model).bold(),
        settings.llm.endpoint
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8501" -> 127.0.0.1:8501
/// - Just a host: "0.0.0.0", "localhost" or "::1" -> host:8501
/// - Host and port: "0.0.0.0:8501" or "[::1]:8501"
///
/// Brackets around IPv6 hosts are stripped; the listener takes host and port
/// separately.
fn parse_bind_address(bind: &str) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return ("127.0.0.1".to_string(), port);
    }

    if let Ok(ip) = bind.parse::<Ipv6Addr>() {
        return (ip.to_string(), DEFAULT_PORT);
    }

    if let Some(rest) = bind.strip_prefix('[') {
        if let Some((host, tail)) = rest.split_once(']') {
            let port = tail
                .strip_prefix(':')
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            return (host.to_string(), port);
        }
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    (bind.to_string(), DEFAULT_PORT)
}
