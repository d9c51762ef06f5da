//! Scripted walk through the home: scenarios, readings, chat and undo.

use homesim_domain::chat::BROADCAST;
use homesim_domain::device::DeviceKind;

use crate::home::Home;

const COLD_READING: f64 = 16.0;
const WARM_READING: f64 = 21.0;

/// Run the demo against `home`, returning every step's result in order.
///
/// Steps whose devices or users are missing from the configured layout are
/// skipped.
#[tracing::instrument(skip_all)]
pub fn run(home: &Home) -> Vec<String> {
    let mut results = Vec::new();
    let orchestrator = home.orchestrator();

    results.extend(orchestrator.arrive_home());

    if let Some(device) = home.first_of(DeviceKind::TemperatureSensor)
        && let Some(sensor) = device.as_temperature_sensor()
    {
        for reading in [COLD_READING, WARM_READING] {
            results.push(sensor.set_temperature(reading));
            results.push(home.selector().heat());
        }
    }

    if let Some(sprinkler) = home.first_of(DeviceKind::Legacy) {
        results.push(sprinkler.turn_on());
        results.push(sprinkler.turn_off());
    }

    // The door is still unlocked, so the light stays on the first time.
    results.extend(orchestrator.leave_home());
    results.extend(orchestrator.leave_home());

    results.extend(chat(home));

    results.push(orchestrator.undo_last());
    results.push(orchestrator.undo_last());

    for result in &results {
        tracing::info!(result = %result, "demo step");
    }
    results
}

fn chat(home: &Home) -> Vec<String> {
    let router = home.registry().router();
    let users = home.registry().users();
    let mut sent = Vec::new();

    let mut send = |from: &str, to: &str, message: &str| {
        let line = match router.send_message(from, to, message) {
            Some(entry) => entry.to_string(),
            None => format!("{from} -> {to}: not delivered, unknown recipient"),
        };
        sent.push(line);
    };

    if let Some(first) = users.first() {
        send(first.name(), BROADCAST, "Dinner is ready");
        send(first.name(), "Nobody", "Are you there?");
    }
    if let [first, second, ..] = users.as_slice() {
        send(second.name(), first.name(), "On my way");
    }
    sent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use homesim_domain::event::LogCategory;

    #[test]
    fn should_walk_through_default_home() {
        let home = Home::build(&Config::default()).unwrap();

        let results = run(&home);

        assert_eq!(results[0], "Front Door unlocked");
        assert_eq!(results[1], "Living Room Light turned on");
        assert!(
            results.contains(&"Refused: lights stay on while Front Door is unlocked".to_string())
        );
        assert!(results.contains(&"John -> all: Dinner is ready".to_string()));
        assert!(results.contains(&"Mary -> John: On my way".to_string()));
        assert_eq!(
            &results[results.len() - 2..],
            ["Front Door unlocked", "Living Room Light turned on"]
        );
    }

    #[test]
    fn should_log_comfort_activation_for_cold_reading() {
        let home = Home::build(&Config::default()).unwrap();

        run(&home);

        let system = home.journal().texts(LogCategory::System);
        assert_eq!(
            system
                .iter()
                .filter(|line| line.starts_with("Heating system activated"))
                .count(),
            1
        );
    }

    #[test]
    fn should_deliver_broadcast_to_everyone_but_sender() {
        let home = Home::build(&Config::default()).unwrap();

        run(&home);

        let registry = home.registry();
        assert_eq!(registry.find_user("Mary").unwrap().inbox().len(), 1);
        assert_eq!(registry.find_user("Paul").unwrap().inbox().len(), 1);
        assert_eq!(registry.find_user("John").unwrap().inbox().len(), 1);
        assert_eq!(home.journal().texts(LogCategory::Chat).len(), 2);
    }

    #[test]
    fn should_skip_steps_for_missing_devices_and_users() {
        let mut config = Config::default();
        config.home.devices.clear();
        config.home.users.clear();
        let home = Home::build(&config).unwrap();

        let results = run(&home);

        assert_eq!(results, vec!["Nothing to undo", "Nothing to undo"]);
    }
}
