use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use qr_studio::config::Settings;
use qr_studio::formatter::parse_event_time;
use qr_studio::history::entry_label;
use qr_studio::models::{
    ContactPayload, EmailPayload, EventPayload, NetworkPayload, PaymentPayload, PhonePayload,
    SmsPayload, TextPayload, WifiEncryption,
};
use qr_studio::render::{default_file_name, save_png, to_svg};
use qr_studio::{
    ErrorCorrection, Escaping, Generator, GradientConfig, GradientKind, History, JsonFileStore,
    Logo, Payload, RenderOptions, Rgb,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR Studio CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a QR code image for a payload
    Generate {
        #[command(subcommand)]
        input: Input,
        #[command(flatten)]
        render: RenderArgs,
        /// Output file (defaults to qr-<millis>.png)
        #[arg(long, global = true)]
        out: Option<PathBuf>,
        /// Write SVG instead of PNG
        #[arg(long, global = true)]
        svg: bool,
        /// Do not record text payloads in the history
        #[arg(long, global = true)]
        no_history: bool,
    },
    /// Print the formatted payload string without rendering
    Payload {
        #[command(subcommand)]
        input: Input,
        /// Escape reserved separators in WIFI/vCard/event/UPI values
        #[arg(long, global = true)]
        strict: bool,
    },
    /// Show or clear recent text payloads
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List entries, most recent first
    List,
    /// Remove all entries
    Clear,
}

#[derive(Subcommand)]
enum Input {
    /// Plain text or URL
    Text { text: String },
    /// Contact card (vCard 3.0)
    Vcard {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        org: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        website: String,
        #[arg(long, default_value = "")]
        address: String,
    },
    /// Calendar event; times as YYYY-MM-DDTHH:MM (treated as UTC)
    Event {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        start: String,
        #[arg(long, default_value = "")]
        end: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// UPI payment link
    Upi {
        #[arg(long, default_value = "")]
        id: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        amount: String,
    },
    /// WiFi network credentials
    Wifi {
        #[arg(long, default_value = "")]
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        /// WPA, WEP or nopass
        #[arg(long, default_value = "WPA")]
        encryption: WifiEncryption,
    },
    /// Email intent
    Email {
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    /// SMS intent
    Sms {
        #[arg(long, default_value = "")]
        number: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Phone call intent
    Phone { number: String },
}

#[derive(Args)]
struct RenderArgs {
    /// Image side in pixels (64 to 4096)
    #[arg(long, global = true)]
    size: Option<u32>,
    /// Quiet zone in modules (at most 16)
    #[arg(long, global = true)]
    margin: Option<u32>,
    /// Error correction level: L, M, Q or H
    #[arg(long, global = true)]
    ec: Option<ErrorCorrection>,
    /// Module color
    #[arg(long, global = true, default_value = "#000000")]
    fg: Rgb,
    /// Background color
    #[arg(long, global = true, default_value = "#ffffff")]
    bg: Rgb,
    /// Gradient kind: linear or radial
    #[arg(long, global = true)]
    gradient: Option<GradientKind>,
    /// First gradient color
    #[arg(long, global = true)]
    gradient_from: Option<Rgb>,
    /// Second gradient color
    #[arg(long, global = true)]
    gradient_to: Option<Rgb>,
    /// Logo image placed at the center
    #[arg(long, global = true)]
    logo: Option<PathBuf>,
    /// Logo box side in pixels (at most the image side)
    #[arg(long, global = true, default_value_t = Logo::DEFAULT_SIZE)]
    logo_size: u32,
}

impl RenderArgs {
    fn into_options(self, mut options: RenderOptions) -> qr_studio::Result<RenderOptions> {
        if let Some(size) = self.size {
            options.size = RenderOptions::clamp_size(size);
        }
        if let Some(margin) = self.margin {
            options.margin = RenderOptions::clamp_margin(margin);
        }
        if let Some(ec) = self.ec {
            options.error_correction = ec;
        }
        options.foreground = self.fg;
        options.background = self.bg;
        if let Some(kind) = self.gradient {
            options.gradient = GradientConfig {
                enabled: true,
                kind,
                colors: [self.gradient_from, self.gradient_to]
                    .into_iter()
                    .flatten()
                    .collect(),
            };
        }
        if let Some(path) = self.logo {
            let image = image::open(&path)?.to_rgba8();
            let logo_size = self.logo_size.min(options.size);
            options.logo = Some(Logo::new(image).with_size(logo_size));
        }
        Ok(options)
    }
}

impl Input {
    fn into_payload(self) -> qr_studio::Result<Payload> {
        let payload = match self {
            Input::Text { text } => Payload::Text(TextPayload { text }),
            Input::Vcard {
                name,
                org,
                phone,
                email,
                website,
                address,
            } => Payload::Contact(ContactPayload {
                name,
                organization: org,
                phone,
                email,
                website,
                address,
            }),
            Input::Event {
                title,
                start,
                end,
                location,
                description,
            } => Payload::Event(EventPayload {
                title,
                start: parse_event_time(&start)?,
                end: parse_event_time(&end)?,
                location,
                description,
            }),
            Input::Upi { id, name, amount } => Payload::Payment(PaymentPayload {
                payee_id: id,
                payee_name: name,
                amount,
            }),
            Input::Wifi {
                ssid,
                password,
                encryption,
            } => Payload::Network(NetworkPayload {
                ssid,
                password,
                encryption,
            }),
            Input::Email { to, subject, body } => Payload::Email(EmailPayload {
                address: to,
                subject,
                body,
            }),
            Input::Sms { number, message } => Payload::Sms(SmsPayload { number, message }),
            Input::Phone { number } => Payload::Phone(PhonePayload { number }),
        };
        Ok(payload)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate {
            input,
            render,
            out,
            svg,
            no_history,
        } => generate_cmd(input, render, out, svg, no_history),
        Command::Payload { input, strict } => payload_cmd(input, strict),
        Command::History { action } => history_cmd(action),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn generate_cmd(
    input: Input,
    render: RenderArgs,
    out: Option<PathBuf>,
    svg: bool,
    no_history: bool,
) -> qr_studio::Result<()> {
    let settings = Settings::from_env();
    let payload = input.into_payload()?;
    let options = render.into_options(settings.render_options())?;

    let mut generator = Generator::new(options);
    if !no_history {
        generator = generator.with_history(History::open(JsonFileStore::new(
            &settings.history_path,
        ))?);
    }
    let code = generator.generate(&payload)?;

    let mut path = out.unwrap_or_else(|| PathBuf::from(default_file_name(Utc::now())));
    if svg {
        if path.extension().is_some_and(|ext| ext == "png") {
            path.set_extension("svg");
        }
        std::fs::write(&path, to_svg(&code.matrix, generator.options()))?;
    } else {
        save_png(&code.image, &path)?;
    }

    println!(
        "Wrote {} ({} payload, {}x{} modules, {}px)",
        path.display(),
        payload.mode(),
        code.matrix.size(),
        code.matrix.size(),
        code.image.width()
    );
    Ok(())
}

fn payload_cmd(input: Input, strict: bool) -> qr_studio::Result<()> {
    let escaping = if strict {
        Escaping::Strict
    } else {
        Escaping::Compatible
    };
    let generator = Generator::default().with_escaping(escaping);
    let payload = input.into_payload()?;
    println!("{}", generator.payload(&payload)?);
    Ok(())
}

fn history_cmd(action: HistoryAction) -> qr_studio::Result<()> {
    let settings = Settings::from_env();
    let mut history = History::open(JsonFileStore::new(&settings.history_path))?;
    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No recent QR codes");
            }
            for (i, entry) in history.entries().iter().enumerate() {
                println!("  {}: {}", i + 1, entry_label(entry));
            }
        }
        HistoryAction::Clear => {
            history.clear()?;
            println!("History cleared ({})", settings.history_path.display());
        }
    }
    Ok(())
}
