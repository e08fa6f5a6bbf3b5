//! Inventory export tests, including the SecureCRT CSV → importer round
//! trip.

use termbridge_core::config::{HostEnvironment, StaticDefaults};
use termbridge_core::export::{ExportFormat, ExportOptions};
use termbridge_core::import::{Delimiter, ImportEngine, ImportOptions};
use termbridge_core::inventory::parse_inventory;
use termbridge_core::models::{Protocol, SessionPath};
use termbridge_core::session::InMemorySessionStore;

const INVENTORY_JSON: &str = r#"[
    {
        "Site_Address": "Berlin DC",
        "Hostname": "core-sw-01",
        "IP": "10.1.0.1",
        "Serial_Number_A": "FDO1234",
        "Serial_Number_B": "",
        "OS_Version": "15.2(4)",
        "Model": "WS-C3850"
    },
    {
        "Site_Address": "Berlin DC",
        "Hostname": "core-sw-02",
        "IP": "10.1.0.2",
        "Serial_Number_A": "",
        "Serial_Number_B": "",
        "OS_Version": "",
        "Model": ""
    },
    {
        "Site_Address": "Lisbon Office",
        "Hostname": "edge-rt-01",
        "IP": "10.2.0.254",
        "Serial_Number_A": "JAE9876",
        "Serial_Number_B": "JAE9877",
        "OS_Version": "17.3.5",
        "Model": "ISR4331"
    }
]"#;

const DEFAULTS: StaticDefaults = StaticDefaults::new(Protocol::Ssh2);

fn unix_env() -> HostEnvironment {
    HostEnvironment {
        major_version: 9,
        windows_like: false,
    }
}

#[test]
fn test_securecrt_export_roundtrips_through_importer() {
    let inventory = parse_inventory(INVENTORY_JSON).expect("inventory parses");
    let csv = ExportFormat::SecureCrt
        .render(&inventory.devices, &ExportOptions::with_username("netops"))
        .expect("render");

    let mut store = InMemorySessionStore::new();
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let report = engine.run_reader(csv.as_bytes(), Delimiter::Text(",".to_string()));

    assert!(!report.is_aborted(), "fatal: {:?}", report.fatal());
    assert_eq!(report.sessions_created(), inventory.devices.len());
    assert!(report.rejected_lines().is_empty());

    let path = SessionPath::new(Some("Berlin DC"), "core-sw-01");
    let record = store.get(&path).expect("session stored");
    assert_eq!(record.hostname, "10.1.0.1");
    assert_eq!(record.protocol, Protocol::Ssh2);
    assert_eq!(record.username.as_deref(), Some("netops"));
    assert_eq!(
        record.description,
        vec!["WS-C3850 15.2(4)".to_string(), "SN FDO1234".to_string()]
    );

    // Device with no hardware data gets no description lines
    let bare = store
        .get(&SessionPath::new(Some("Berlin DC"), "core-sw-02"))
        .expect("session stored");
    assert!(bare.description.is_empty());
}

#[test]
fn test_all_formats_render_every_device() {
    let inventory = parse_inventory(INVENTORY_JSON).expect("inventory parses");
    let options = ExportOptions::with_username("netops");
    for format in ExportFormat::ALL {
        let output = format
            .render(&inventory.devices, &options)
            .expect("render");
        for device in &inventory.devices {
            assert!(
                output.contains(device.hostname.as_str()),
                "{format} output is missing {}",
                device.hostname
            );
        }
    }
}

#[test]
fn test_superputty_groups_by_site() {
    let inventory = parse_inventory(INVENTORY_JSON).expect("inventory parses");
    let xml = ExportFormat::SuperPutty
        .render(&inventory.devices, &ExportOptions::default())
        .expect("render");
    assert!(xml.contains("SessionId=\"Berlin DC/core-sw-01\""));
    assert!(xml.contains("SessionId=\"Lisbon Office/edge-rt-01\""));
}

#[test]
fn test_putty_list_is_one_line_per_device() {
    let inventory = parse_inventory(INVENTORY_JSON).expect("inventory parses");
    let txt = ExportFormat::Putty
        .render(&inventory.devices, &ExportOptions::default())
        .expect("render");
    assert_eq!(txt.lines().count(), inventory.devices.len());
}
