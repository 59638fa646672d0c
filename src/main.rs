use anyhow::Result;
use tracing_subscriber::EnvFilter;

use weatherdash::clock;
use weatherdash::config::WeatherDashConfig;
use weatherdash::forecast::ForecastClient;
use weatherdash::location::LocationResolver;
use weatherdash::models::weather::format_temperature;
use weatherdash::session::Session;
use weatherdash::{api::ApiState, map, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WeatherDashConfig::load()?;
    init_tracing(&config);

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("serve") => {
            let port = match args.next() {
                Some(p) => p.parse()?,
                None => config.server.port,
            };
            let state = ApiState::from_config(&config)?;
            web::run(state, port).await
        }
        Some("clocks") => {
            print!("{}", render_world_clocks(config.units.clock));
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command '{other}'. Usage: weatherdash [serve [port] | clocks]");
            std::process::exit(2);
        }
        None => render_once(&config).await,
    }
}

fn render_world_clocks(format: weatherdash::models::ClockFormat) -> String {
    let mut out = String::new();
    for (label, timezone) in clock::WORLD_CLOCK_ZONES {
        out.push_str(&format!(
            "  {:<10} {}\n",
            label,
            clock::world_clock(timezone, format)
        ));
    }
    out
}

fn init_tracing(config: &WeatherDashConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// One-shot dashboard: resolve the city, fetch the forecast, print it.
async fn render_once(config: &WeatherDashConfig) -> Result<()> {
    let resolver = LocationResolver::from_config(config)?;
    let forecast = ForecastClient::new(&config.forecast)?;

    let city = resolver.resolve().await;
    let mut session = Session::new(city, config.units);
    session.refresh(&forecast).await;

    print!("{}", render_dashboard(&session));
    Ok(())
}

fn render_dashboard(session: &Session) -> String {
    let units = session.units();
    let city = session.city();
    let mut out = String::new();

    out.push_str(&format!("Weather for {}\n", city.display_name()));
    out.push_str(&format!(
        "Map: {}\n\n",
        map::embed_url(city.latitude(), city.longitude())
    ));

    if let Some(error) = session.last_error() {
        out.push_str(&format!("Forecast unavailable: {error}\n"));
        return out;
    }

    let weather = session.weather();
    if !weather.is_populated() {
        out.push_str("No forecast data yet.\n");
        return out;
    }

    let current = &weather.current;
    out.push_str(&format!(
        "Now: {} {}  wind {:.1} {}  humidity {}%  UV index {:.1}\n\n",
        format_temperature(current.temperature, units.temperature),
        current.description.label(),
        current.wind_speed,
        units.speed.symbol(),
        current.relative_humidity,
        current.uv_index,
    ));

    out.push_str("Next 12 hours:\n");
    for item in &weather.hourly {
        out.push_str(&format!(
            "  {:>8}  {:>5}  {:<14} rain {:>3}%  visibility {:.0} m\n",
            clock::format_hour(item.hour, units.clock),
            format_temperature(item.temperature, units.temperature),
            item.description.label(),
            item.rain_chance,
            item.visibility,
        ));
    }

    out.push_str("\nNext 7 days:\n");
    for item in &weather.daily {
        out.push_str(&format!(
            "  {:<10} {:>5} / {:>5}  {}\n",
            item.weekday,
            format_temperature(item.temperature_high, units.temperature),
            format_temperature(item.temperature_low, units.temperature),
            item.description.label(),
        ));
    }

    out
}
