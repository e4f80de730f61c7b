use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn rules_export() {
    print!("{}", dango_core::rules::default_toml());
}

pub fn rules_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let machine = die!(dango_core::rules::parse_rules_toml(&content), "Error: {}");
    println!(
        "OK: {} states, {} transitions",
        machine.states().len(),
        machine.transition_count()
    );
}
