use chrono::Utc;
use sheetepoch::{CalendarTimestamp, EpochConverter, SystemType};

fn main() {
    env_logger::init();

    let now = CalendarTimestamp::from(Utc::now());
    let mut converter = EpochConverter::new(SystemType::Windows);

    println!("now: {now}");
    println!("Windows serial: {}", converter.to_number(now.clone()));

    converter.set_system_type(SystemType::Apple);
    println!("Apple serial: {}", converter.to_number(now));

    converter.set_system_type(SystemType::Windows);
    match converter.to_calendar_diagnosed(60, None) {
        Ok(leap) => println!("serial 60: {} ({:?})", leap.value, leap.warning),
        Err(err) => eprintln!("error: {err}"),
    }
}
