use mixpanel_unofficial::{Config, Event, Properties, Update};
use std::time::Duration;

fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let token = std::env::var("MIXPANEL_TOKEN").unwrap();
    let mixpanel = Config::new(&token)
        .with_timeout(Duration::from_secs(10))
        .client();

    let mut properties = Properties::new();
    properties.insert("Plan".to_owned(), "Premium".into());
    let event = Event {
        properties,
        ..Event::default()
    };
    mixpanel.track("demo-user", "Signed Up", &event).unwrap();

    let mut properties = Properties::new();
    properties.insert("Address".to_owned(), "1313 Mockingbird Lane".into());
    let update = Update {
        operation: "$set".to_owned(),
        properties,
    };
    mixpanel.update("demo-user", &update).unwrap();

    println!("sent one event and one profile update");
}
