use logwire_config::{LogConfiguration, LogLevel};

use std::fmt;

use fern::colors::{Color, ColoredLevelConfig};
use log::Record;
use log::kv::{self, Key, VisitSource};
use serde_json::{Map, Number, Value};

const UNDEFINED_CALLER: &str = "undefined";

/// Turns one record into a single output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    /// One JSON object per line: `level`, `ts`, `caller`, `msg`, then fields
    Json,
    /// Tab separated `ts level caller msg [fields]`
    Console { colored: bool },
}

impl Encoder {
    pub fn select(config: &LogConfiguration) -> Self {
        if config.format_json {
            Encoder::Json
        } else {
            Encoder::Console {
                colored: config.colored_output(),
            }
        }
    }

    pub fn encode(
        &self,
        timestamp: &str,
        severity: LogLevel,
        record: &Record<'_>,
        message: &dyn fmt::Display,
    ) -> String {
        let fields = collect_fields(record);
        let caller = caller(record);

        match self {
            Encoder::Json => {
                let mut object = Map::new();
                object.insert("level".into(), Value::from(level_label(severity)));
                object.insert("ts".into(), Value::from(timestamp));
                object.insert("caller".into(), Value::from(caller));
                object.insert("msg".into(), Value::from(message.to_string()));
                object.extend(fields);
                Value::Object(object).to_string()
            }
            Encoder::Console { colored } => {
                let label = if *colored {
                    colored_label(severity)
                } else {
                    level_label(severity).to_string()
                };

                let mut line = format!("{timestamp}\t{label}\t{caller}\t{message}");
                if !fields.is_empty() {
                    line.push('\t');
                    line.push_str(&Value::Object(fields).to_string());
                }
                line
            }
        }
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoder::Json => f.write_str("json"),
            Encoder::Console { colored: true } => f.write_str("console (colored)"),
            Encoder::Console { colored: false } => f.write_str("console"),
        }
    }
}

fn level_label(severity: LogLevel) -> &'static str {
    match severity {
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
        LogLevel::Panic => "dpanic",
    }
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .debug(Color::Magenta)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn colored_label(severity: LogLevel) -> String {
    let level = match severity {
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error | LogLevel::Panic => log::Level::Error,
    };
    let color = level_colors().get_color(&level);

    // `ColoredLevelConfig::color` would print the facade's ERROR for dpanic.
    format!(
        "\x1B[{}m{}\x1B[0m",
        color.to_fg_str(),
        level_label(severity).to_uppercase()
    )
}

fn caller(record: &Record<'_>) -> String {
    match (record.file(), record.line()) {
        (Some(file), Some(line)) => format!("{file}:{line}"),
        (Some(file), None) => file.to_string(),
        _ => String::from(UNDEFINED_CALLER),
    }
}

fn collect_fields(record: &Record<'_>) -> Map<String, Value> {
    let mut collector = FieldCollector(Map::new());
    // A failing source only loses its remaining pairs.
    let _ = record.key_values().visit(&mut collector);
    collector.0
}

struct FieldCollector(Map<String, Value>);

impl<'kvs> VisitSource<'kvs> for FieldCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        self.0.insert(key.as_str().to_owned(), field_value(&value));
        Ok(())
    }
}

fn field_value(value: &kv::Value<'_>) -> Value {
    if let Some(b) = value.to_bool() {
        return Value::Bool(b);
    }
    if let Some(i) = value.to_i64() {
        return Value::from(i);
    }
    if let Some(u) = value.to_u64() {
        return Value::from(u);
    }
    if let Some(number) = value.to_f64().and_then(Number::from_f64) {
        return Value::Number(number);
    }
    Value::String(value.to_string())
}
