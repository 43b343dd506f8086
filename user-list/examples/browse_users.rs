use log::info;
use std::time::Duration;
use user_list::{HttpPageFetcherBuilder, Locale, UserList};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let base_url =
        std::env::var("USER_LIST_URL").unwrap_or_else(|_| "http://localhost:8080/".to_string());
    let locale = match std::env::var("USER_LIST_LOCALE") {
        Ok(code) => code.parse()?,
        Err(_) => Locale::from_system(),
    };

    let fetcher = HttpPageFetcherBuilder::new(base_url.as_str())
        .with_timeout(Duration::from_secs(5))
        .build()?;
    let mut list = UserList::new(fetcher).with_page_size(3).with_locale(locale);

    info!("Browsing users at {}", base_url);
    list.mount();
    list.wait_idle().await;

    loop {
        println!("{}", list.view());
        if let Some(err) = list.state().error() {
            return Err(format!("Stopped on page {}: {}", list.state().current_page(), err).into());
        }
        if !list.next() {
            break;
        }
        list.wait_idle().await;
    }

    info!("Reached the last page");
    Ok(())
}
