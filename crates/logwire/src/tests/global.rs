use crate::global::publish;
use crate::tests::{SharedBuffer, blocked_tee_config, file_config, read_logs};
use crate::{Encoder, LogConfiguration, LogLevel, Logger, WriteTarget, current, initialize};

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, not};
use log::LevelFilter;
use serial_test::serial;
use tempfile::TempDir;

fn console(level: LogLevel) -> LogConfiguration {
    LogConfiguration {
        level,
        ..LogConfiguration::default()
    }
}

// =========================================================================
// Publishing
// =========================================================================

#[test]
#[serial]
fn given_both_outputs_disabled_when_initialize_then_global_state_untouched() {
    // Given
    let installed = initialize(&console(LogLevel::Warn)).unwrap().unwrap();
    let max_level = log::max_level();
    let disabled = LogConfiguration {
        console_enable: false,
        file_enable: false,
        format_json: true,
        color: true,
        level: LogLevel::Debug,
        ..LogConfiguration::default()
    };

    // When
    let result = initialize(&disabled).unwrap();

    // Then
    assert_that!(result.is_none(), eq(true));
    assert_that!(Arc::ptr_eq(&current().unwrap(), &installed), eq(true));
    assert_that!(log::max_level(), eq(max_level));
}

#[test]
#[serial]
fn given_config_when_initialize_then_current_is_returned_handle() {
    // When
    let installed = initialize(&console(LogLevel::Info)).unwrap().unwrap();

    // Then
    assert_that!(Arc::ptr_eq(&current().unwrap(), &installed), eq(true));
    assert_that!(log::max_level(), eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_installed_logger_when_initialize_again_then_replaced() {
    // Given
    let first = initialize(&console(LogLevel::Error)).unwrap().unwrap();

    // When
    let second = initialize(&console(LogLevel::Debug)).unwrap().unwrap();

    // Then
    assert_that!(Arc::ptr_eq(&first, &second), eq(false));
    assert_that!(Arc::ptr_eq(&current().unwrap(), &second), eq(true));
    assert_that!(current().unwrap().level(), eq(LogLevel::Debug));
    assert_that!(log::max_level(), eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_console_debug_color_when_initialize_then_colored_stderr_logger() {
    // Given
    let config = LogConfiguration {
        console_enable: true,
        file_enable: false,
        format_json: false,
        color: true,
        level: LogLevel::Debug,
        ..LogConfiguration::default()
    };

    // When
    let logger = initialize(&config).unwrap().unwrap();
    log::debug!("debug passes");
    log::info!("info passes");
    log::warn!("warn passes");
    log::error!("err passes");
    crate::dpanic!("panic passes");

    // Then
    assert_that!(logger.encoder(), eq(Encoder::Console { colored: true }));
    assert_that!(logger.target(), eq(&WriteTarget::Stderr));
    assert_that!(log::log_enabled!(log::Level::Debug), eq(true));
    assert_that!(log::log_enabled!(log::Level::Trace), eq(false));
}

// =========================================================================
// Records Through The Facade
// =========================================================================

#[test]
#[serial]
fn given_file_logger_when_logging_through_facade_then_file_has_records_with_caller() {
    // Given
    let temp = TempDir::new().unwrap();
    initialize(&file_config(&temp)).unwrap().unwrap();

    // When
    log::info!("through facade");
    log::debug!("below threshold");
    log::logger().flush();

    // Then
    let contents = read_logs(temp.path());
    assert_that!(contents, contains_substring("\tinfo\t"));
    assert_that!(contents, contains_substring("src/tests/global.rs:"));
    assert_that!(contents, contains_substring("\tthrough facade"));
    assert_that!(contents, not(contains_substring("below threshold")));
}

#[test]
#[serial]
fn given_panic_level_when_dpanic_through_facade_then_only_dpanic_written() {
    // Given
    let temp = TempDir::new().unwrap();
    initialize(&LogConfiguration {
        level: LogLevel::Panic,
        ..file_config(&temp)
    })
    .unwrap()
    .unwrap();

    // When
    log::error!("ordinary failure");
    crate::dpanic!("state corrupted: {}", 7);
    log::logger().flush();

    // Then
    let contents = read_logs(temp.path());
    assert_that!(contents, not(contains_substring("ordinary failure")));
    assert_that!(contents, contains_substring("\tdpanic\t"));
    assert_that!(contents, contains_substring("state corrupted: 7"));
}

#[test]
#[serial]
fn given_json_file_logger_when_logging_key_values_then_fields_in_object() {
    // Given
    let temp = TempDir::new().unwrap();
    initialize(&LogConfiguration {
        format_json: true,
        ..file_config(&temp)
    })
    .unwrap()
    .unwrap();

    // When
    log::info!(user = "alice", attempt = 2; "login");
    log::logger().flush();

    // Then
    let contents = read_logs(temp.path());
    assert_that!(contents, contains_substring(r#""msg":"login""#));
    assert_that!(contents, contains_substring(r#""user":"alice""#));
    assert_that!(contents, contains_substring(r#""attempt":2"#));
}

#[test]
#[serial]
fn given_debug_level_when_initialize_then_reports_itself() {
    // Given
    let temp = TempDir::new().unwrap();

    // When
    initialize(&LogConfiguration {
        level: LogLevel::Debug,
        ..file_config(&temp)
    })
    .unwrap()
    .unwrap();
    log::logger().flush();

    // Then
    let contents = read_logs(temp.path());
    assert_that!(contents, contains_substring("Logger initialized: level=debug"));
}

// =========================================================================
// Unopenable File With Console Enabled
// =========================================================================

#[test]
#[serial]
fn given_console_and_unopenable_file_when_initialize_then_stderr_logger_installed() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = blocked_tee_config(&temp);

    // When
    let result = initialize(&config);

    // Then
    assert_that!(result.is_ok(), eq(true));
    let installed = result.unwrap().unwrap();
    assert_that!(Arc::ptr_eq(&current().unwrap(), &installed), eq(true));
    assert_that!(current().unwrap().target(), eq(&WriteTarget::Stderr));
}

#[test]
#[serial]
fn given_console_and_unopenable_file_when_published_then_failure_reported_on_console() {
    // Given
    let temp = TempDir::new().unwrap();
    let console = SharedBuffer::default();
    let logger =
        Logger::build_with_console(&blocked_tee_config(&temp), Box::new(console.clone()))
            .unwrap()
            .unwrap();

    // When
    publish(logger).unwrap();
    log::info!("after fallback");
    log::logger().flush();

    // Then
    let echoed = console.contents();
    assert_that!(echoed, contains_substring("\terror\t"));
    assert_that!(echoed, contains_substring("Failed to open rotating log file"));
    assert_that!(echoed, contains_substring("writing to stderr only"));
    assert_that!(echoed, contains_substring("\tafter fallback"));
}
