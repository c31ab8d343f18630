#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn ReloadHandle___new___not_initialized() {
    let handle = ReloadHandle::new();

    assert!(!handle.is_initialized());
    assert_eq!(handle.current_level(), None);
}

#[test]
fn ReloadHandle___reload_level___without_handle_fails() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert_eq!(result, Err("Reload handle not initialized".to_string()));
    assert_eq!(handle.current_level(), None);
}

#[test]
fn ReloadHandle___set_handle___records_level() {
    let (_layer, inner) = reload::Layer::<LevelFilter, Registry>::new(LevelFilter::INFO);
    let handle = ReloadHandle::new();

    handle.set_handle(inner, LogLevel::Info);

    assert!(handle.is_initialized());
    assert_eq!(handle.current_level(), Some(LogLevel::Info));
}

#[test]
fn ReloadHandle___global___same_instance() {
    let a = ReloadHandle::global() as *const ReloadHandle;
    let b = ReloadHandle::global() as *const ReloadHandle;

    assert_eq!(a, b);
}

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Debug, LevelFilter::DEBUG)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Warn, LevelFilter::WARN)]
#[test_case(LogLevel::Error, LevelFilter::ERROR)]
#[test_case(LogLevel::Off, LevelFilter::OFF)]
fn convert_level_to_filter___maps_each_level(level: LogLevel, expected: LevelFilter) {
    assert_eq!(convert_level_to_filter(level), expected);
}
