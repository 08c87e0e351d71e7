use clap::Parser;

pub const PUBLIC_ADDR: &str = "0.0.0.0:80";
pub const LOCAL_ADDR: &str = "127.0.0.1:3000";

/// Startup options. The two bind modes are mutually exclusive; with no flag
/// the server listens on the public address.
#[derive(Parser, Debug)]
#[command(name = "number-pages")]
#[command(about = "Serves two server-rendered pages of numbers")]
pub struct ServeArgs {
    /// Listen on 0.0.0.0:80 (the default)
    #[arg(long, conflicts_with = "local")]
    pub public: bool,

    /// Listen on 127.0.0.1:3000 for local runs
    #[arg(long)]
    pub local: bool,
}

impl ServeArgs {
    pub fn bind_addr(&self) -> &'static str {
        if self.local { LOCAL_ADDR } else { PUBLIC_ADDR }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_public() {
        let args = ServeArgs::parse_from(["number-pages"]);
        assert_eq!(args.bind_addr(), PUBLIC_ADDR);
    }

    #[test]
    fn public_flag_is_explicit_default() {
        let args = ServeArgs::parse_from(["number-pages", "--public"]);
        assert_eq!(args.bind_addr(), PUBLIC_ADDR);
    }

    #[test]
    fn local_flag_binds_loopback() {
        let args = ServeArgs::parse_from(["number-pages", "--local"]);
        assert_eq!(args.bind_addr(), LOCAL_ADDR);
    }

    #[test]
    fn modes_conflict() {
        let parsed = ServeArgs::try_parse_from(["number-pages", "--public", "--local"]);
        assert!(parsed.is_err());
    }
}
