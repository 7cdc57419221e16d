use std::io::Write;

use tracing_subscriber::EnvFilter;

use skycard::config::Config;
use skycard::location::IpLocation;
use skycard::render::render;
use skycard::screen::Screen;
use skycard::weather::WeatherApi;

/// Initializes logging and configuration, shows weather for the device
/// position, then reads commands until the user sends `exit`: `refresh`
/// re-runs the location path, anything else is a city search.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let weather = WeatherApi::new(&config);
    let location = IpLocation::new(config.allow_location);
    let screen = Screen::new(weather, location);

    println!("Type a city to search, `refresh` for local weather, `exit` to quit");

    screen.load_local_weather().await;
    print!("{}", render(&screen.state()));

    let mut buffer = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        buffer.clear();
        if std::io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let input = buffer.trim();
        if input == "exit" {
            break;
        }
        if input == "refresh" {
            screen.load_local_weather().await;
        } else {
            // Empty input is a no-op inside search
            screen.search(input).await;
        }
        print!("{}", render(&screen.state()));
    }

    Ok(())
}
