//! End-to-end import runs over real files and a directory-backed store.

use std::fs;
use std::io::Write as _;

use termbridge_core::config::{HostEnvironment, StaticDefaults};
use termbridge_core::import::{
    Delimiter, ImportEngine, ImportOptions, ReportDestination, ReportWriter,
};
use termbridge_core::models::{Protocol, SessionPath};
use termbridge_core::session::{DirSessionStore, InMemorySessionStore, SessionStore};

const DEFAULTS: StaticDefaults = StaticDefaults::new(Protocol::Ssh2);

fn unix_env() -> HostEnvironment {
    HostEnvironment {
        major_version: 9,
        windows_like: false,
    }
}

fn windows_env() -> HostEnvironment {
    HostEnvironment {
        major_version: 9,
        windows_like: true,
    }
}

fn write_input(dir: &std::path::Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("hosts.csv");
    let mut file = fs::File::create(&path).expect("create input file");
    file.write_all(content.as_bytes()).expect("write input");
    path
}

#[test]
fn test_import_file_into_directory_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(
        dir.path(),
        "hostname,username,folder,protocol=SSH2\n\
         192.168.0.1,root,_imported,SSH1\n\
         192.168.0.2,admin,_imported,SSH2\n\
         192.168.0.3,root,_imported/folderA,\n\
         192.168.0.4,root,,\n\
         192.168.0.5,admin,_imported/folderB,telnet\n",
    );

    let store_root = dir.path().join("sessions");
    let mut store = DirSessionStore::new(&store_root);
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let report = engine
        .run_file(&input, Delimiter::Text(",".to_string()))
        .expect("input file opens");

    assert!(!report.is_aborted());
    assert_eq!(report.lines_processed(), 5);
    assert_eq!(report.sessions_created(), 5);

    // Defaulted protocol on line 3, no folder on line 4
    let content = fs::read_to_string(store_root.join("_imported/folderA/192.168.0.3.ini"))
        .expect("session file exists");
    assert!(content.contains("protocol=SSH2"));
    assert!(content.contains("username=root"));
    assert!(store_root.join("192.168.0.4.ini").exists());
    assert!(store_root.join("_imported/folderB/192.168.0.5.ini").exists());
}

#[test]
fn test_mixed_run_collects_rejections_and_continues() {
    let input = "hostname,protocol,port,emulation\n\
                 host1,ssh2,22,xterm\n\
                 host2,serial,22,xterm\n\
                 host3,ssh2,badport,xterm\n\
                 host4,ssh2,22,vt52\n\
                 host5,ssh2,22,vt100\n";
    let mut store = InMemorySessionStore::new();
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let report = engine.run_reader(input.as_bytes(), Delimiter::Text(",".to_string()));

    assert_eq!(report.lines_processed(), 5);
    assert_eq!(report.sessions_created(), 2);
    assert_eq!(
        report.rejected_lines(),
        vec![
            "host2,serial,22,xterm",
            "host3,ssh2,badport,xterm",
            "host4,ssh2,22,vt52",
        ]
    );

    let summary = report.render();
    assert!(summary.contains("hostname,protocol,port,emulation"));
    assert!(summary.contains("Number of sessions created: 2"));
    assert!(summary.contains("unsupported protocol \"serial\""));
}

#[test]
fn test_reserved_name_only_rejected_on_windows_target() {
    let input = "hostname,folder\nhost1,ops/CON\n";

    let mut store = InMemorySessionStore::new();
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        windows_env(),
        ImportOptions::default(),
    );
    let report = engine.run_reader(input.as_bytes(), Delimiter::Text(",".to_string()));
    assert_eq!(report.sessions_created(), 0);
    assert_eq!(report.rejected_lines(), vec!["host1,ops/CON"]);

    let mut store = InMemorySessionStore::new();
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let report = engine.run_reader(input.as_bytes(), Delimiter::Text(",".to_string()));
    assert_eq!(report.sessions_created(), 1);
    assert!(store.exists(&SessionPath::new(Some("ops/CON"), "host1")));
}

#[test]
fn test_duplicate_against_seeded_store_gets_suffix() {
    let mut store = InMemorySessionStore::new();
    let path = SessionPath::new(None, "web01");
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let first = engine.run_reader(
        "hostname\nweb01\n".as_bytes(),
        Delimiter::SingleField(",".to_string()),
    );
    assert_eq!(first.sessions_created(), 1);

    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let second = engine.run_reader(
        "hostname\nweb01\n".as_bytes(),
        Delimiter::SingleField(",".to_string()),
    );
    assert_eq!(second.sessions_created(), 1);
    let created = second.created_paths();
    assert_ne!(created[0].as_str(), "web01");
    assert!(created[0].as_str().starts_with("web01 (import_"));
    assert!(store.exists(&path));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = InMemorySessionStore::new();
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let result = engine.run_file(
        &dir.path().join("missing.csv"),
        Delimiter::Text(",".to_string()),
    );
    assert!(result.is_err());
}

#[test]
fn test_report_written_through_fallback_chain() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = "hostname\nweb01\n";
    let mut store = InMemorySessionStore::new();
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let report = engine.run_reader(
        input.as_bytes(),
        Delimiter::SingleField(",".to_string()),
    );

    let writer = ReportWriter::with_locations(vec![
        dir.path().join("missing-primary"),
        dir.path().to_path_buf(),
    ]);
    match writer.write(&report.render()) {
        ReportDestination::File(path) => {
            let text = fs::read_to_string(path).expect("read report back");
            assert!(text.contains("Number of sessions created: 1"));
        }
        ReportDestination::Handoff(_) => panic!("secondary location was writable"),
    }
}

#[test]
fn test_aborted_run_still_renders_accumulated_errors() {
    let input = "hostname,protocol\n,badhost\nhost2,ssh2\n";
    let mut store = InMemorySessionStore::new().with_forced_protocol(Protocol::Telnet);
    let mut engine = ImportEngine::new(
        &mut store,
        &DEFAULTS,
        unix_env(),
        ImportOptions::default(),
    );
    let report = engine.run_reader(input.as_bytes(), Delimiter::Text(",".to_string()));

    assert!(report.is_aborted());
    let summary = report.render();
    assert!(summary.contains("Import aborted:"));
    // The earlier rejection is still in the summary
    assert!(summary.contains("hostname field is empty"));
}
