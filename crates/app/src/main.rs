use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use folio_core::Clock;
use folio_core::model::Profile;
use services::{
    ContactGateway, ContactService, HttpGateway, ProfileService, SimulatedGateway,
    contact::SIMULATED_DELAY,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => {
                write!(f, "invalid --simulated-delay-ms value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    clock: Clock,
    profile: Arc<Profile>,
    contact: Arc<ContactService>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn profile(&self) -> Arc<Profile> {
        Arc::clone(&self.profile)
    }

    fn contact(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact)
    }
}

struct Args {
    contact_endpoint: Option<String>,
    simulated_delay: Duration,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--contact-endpoint <url>] [--simulated-delay-ms <ms>]");
    eprintln!();
    eprintln!("Without --contact-endpoint the contact form uses a local simulation");
    eprintln!("that waits the configured delay and then reports success.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FOLIO_CONTACT_ENDPOINT, FOLIO_SIMULATED_DELAY_MS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut contact_endpoint = std::env::var("FOLIO_CONTACT_ENDPOINT").ok();
        let mut simulated_delay = std::env::var("FOLIO_SIMULATED_DELAY_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(SIMULATED_DELAY, Duration::from_millis);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--contact-endpoint" => {
                    contact_endpoint = Some(require_value(args, "--contact-endpoint")?);
                }
                "--simulated-delay-ms" => {
                    let value = require_value(args, "--simulated-delay-ms")?;
                    let millis: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDelay { raw: value.clone() })?;
                    simulated_delay = Duration::from_millis(millis);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            contact_endpoint,
            simulated_delay,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::default_clock();
    let profile = Arc::new(ProfileService.load_default()?);

    let gateway: Arc<dyn ContactGateway> = match parsed.contact_endpoint.as_deref() {
        Some(endpoint) => Arc::new(HttpGateway::new(endpoint)?),
        None => Arc::new(SimulatedGateway::with_delay(parsed.simulated_delay)),
    };
    let contact = Arc::new(ContactService::new(clock, gateway));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock,
        profile,
        contact,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
