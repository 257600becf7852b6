#![cfg(test)]

use std::fs;
use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Cursor, Read, Write};
use std::rc::Rc;

use tempfile::NamedTempFile;

use super::exit::is_pending;
use super::*;

#[test]
fn test_read_all_as_string() {
    let mut reader = Cursor::new("héllo\nwörld");
    assert_eq!(read_all_as_string(&mut reader).unwrap(), "héllo\nwörld");
    assert_eq!(
        read_all_as_string(&mut reader).unwrap(),
        "",
        "The reader should stay usable, with nothing left to read."
    );

    let mut invalid = Cursor::new(vec![0xff, 0xfe]);
    assert_eq!(
        read_all_as_string(&mut invalid).unwrap_err().kind(),
        io::ErrorKind::InvalidData
    );
}

#[test]
fn test_read_all_as_lines() {
    assert_eq!(read_all_as_lines(&mut "a\nb\nc".as_bytes()).unwrap(), ["a", "b", "c"]);
    assert_eq!(
        read_all_as_lines(&mut "a\r\nb\n".as_bytes()).unwrap(),
        ["a", "b"],
        "Line terminators should be removed, and a trailing one shouldn't add an empty line."
    );
    assert!(read_all_as_lines(&mut "".as_bytes()).unwrap().is_empty());
    assert_eq!(read_all_as_lines(&mut "\n\n".as_bytes()).unwrap(), ["", ""]);
}

#[test]
fn test_read_all_as_lines_carriage_returns() {
    assert_eq!(
        read_all_as_lines(&mut "a\rb\rc".as_bytes()).unwrap(),
        ["a", "b", "c"],
        "A lone carriage return should end a line."
    );
    assert_eq!(
        read_all_as_lines(&mut "a\r\rb\r\n\nc\r".as_bytes()).unwrap(),
        ["a", "", "b", "", "c"],
        "A carriage return followed by a newline should count as one terminator."
    );

    let mut split = BufReader::with_capacity(3, "ab\r\ncd".as_bytes());
    assert_eq!(
        read_all_as_lines(&mut split).unwrap(),
        ["ab", "cd"],
        "A terminator split between two reads should still count once."
    );

    let mut invalid = Cursor::new(b"ok\n\xff\n".to_vec());
    assert_eq!(read_all_as_lines(&mut invalid).unwrap_err().kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_read_file_as_string() {
    let text = "first line\nsecond line\n\ttabbed ✓\n";
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();

    assert_eq!(
        read_file_as_string(file.path()).unwrap(),
        text,
        "File contents should round trip."
    );
    assert_eq!(read_file_as_string(file.path().to_str().unwrap()).unwrap(), text);

    let missing = file.path().with_extension("missing");
    assert_eq!(read_file_as_string(missing).unwrap_err().kind(), io::ErrorKind::NotFound);
}

fn properties_bundle() -> MemoryResolver {
    MemoryResolver::new("config")
        .with(
            "app.properties",
            concat!(
                "# comment\n",
                "! another comment\n",
                "name = demo\n",
                "port:8080\n",
                "long = first \\\n",
                "    second\n",
                "empty=\n",
            ),
        )
        .with("override.properties", "name=override\n")
        .with("broken.properties", "bad = \\uZZZZ\n")
}

#[test]
fn test_read_properties_from_resource() {
    let bundle = properties_bundle();
    let mut properties = Properties::new();
    read_properties_from_resource(&mut properties, Some(&bundle), Some("app.properties")).unwrap();

    assert_eq!(properties.len(), 4, "Comments shouldn't produce entries.");
    assert_eq!(properties["name"], "demo");
    assert_eq!(properties["port"], "8080", "Colons should separate keys and values too.");
    assert_eq!(properties["long"], "first second", "Backslashes should continue values.");
    assert_eq!(properties["empty"], "");

    read_properties_from_resource(&mut properties, Some(&bundle), Some("/override.properties"))
        .unwrap();
    assert_eq!(properties["name"], "override", "Loading again should overwrite existing keys.");
    assert_eq!(properties["port"], "8080", "Keys not in the new resource should be kept.");
}

#[test]
fn test_read_properties_from_resource_edge_cases() {
    let bundle = properties_bundle();
    let mut properties = Properties::from([(String::from("kept"), String::from("yes"))]);

    read_properties_from_resource(&mut properties, Some(&bundle), None).unwrap();
    assert_eq!(properties.len(), 1, "A missing name should leave the properties untouched.");

    let err = read_properties_from_resource(&mut properties, None, Some("app.properties"))
        .unwrap_err();
    assert_eq!(err.to_string(), "context cannot be null");

    let err = read_properties_from_resource(&mut properties, Some(&bundle), Some("nope.properties"))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("nope.properties"), "The error should name the resource.");

    let err =
        read_properties_from_resource(&mut properties, Some(&bundle), Some("broken.properties"))
            .unwrap_err();
    assert!(err.is_properties(), "Malformed escapes should be reported as a parse failure.");
    assert_eq!(properties.len(), 1, "A malformed resource shouldn't be partially loaded.");
}

#[test]
fn test_create_properties_from_resource() {
    let bundle = properties_bundle();
    let properties =
        create_properties_from_resource(Some(&bundle), Some("override.properties")).unwrap();
    assert_eq!(properties, Properties::from([(String::from("name"), String::from("override"))]));

    assert!(create_properties_from_resource(Some(&bundle), None).unwrap().is_empty());
    let err = load_properties_from_resource(None, Some("app.properties")).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_load_properties_from_resources() {
    let bundle = properties_bundle();
    let names = ["override.properties", "app.properties"];
    let loaded = load_properties_from_resources(Some(&bundle), Some(&names[..])).unwrap().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0]["name"], "override", "Results should be in the order of the names.");
    assert_eq!(loaded[1]["name"], "demo");

    assert!(load_properties_from_resources(Some(&bundle), None).unwrap().is_none());
    let names = ["app.properties", "nope.properties"];
    let err = load_properties_from_resources(Some(&bundle), Some(&names[..])).unwrap_err();
    assert!(err.is_not_found(), "Loading should stop at the first missing resource.");
}

#[test]
fn test_get_user_input_from() {
    let mut input = Cursor::new("yes\r\nno\n");
    let mut output = Vec::new();

    assert_eq!(
        get_user_input_from("Continue? ", &mut input, &mut output).unwrap().as_deref(),
        Some("yes")
    );
    assert_eq!(output, b"Continue? ", "The prompt should be written without a newline.");

    let mut rest = String::new();
    input.read_line(&mut rest).unwrap();
    assert_eq!(rest, "no\n", "Only one line should be consumed.");

    assert_eq!(
        get_user_input_from("Again? ", &mut input, &mut output).unwrap(),
        None,
        "End of input should produce nothing."
    );
    assert_eq!(output, b"Continue? Again? ");

    let mut last = "no newline".as_bytes();
    assert_eq!(
        get_user_input_from("", &mut last, &mut io::sink()).unwrap().as_deref(),
        Some("no newline")
    );
}

/// Only makes written bytes visible once they are flushed.
struct FlushedOutput {
    pending: Vec<u8>,
    flushed: Rc<RefCell<Vec<u8>>>,
}

impl Write for FlushedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed.borrow_mut().append(&mut self.pending);
        Ok(())
    }
}

/// Remembers what had been flushed to the output at the moment input was first read.
struct ObservedInput {
    data: &'static [u8],
    flushed: Rc<RefCell<Vec<u8>>>,
    seen_at_read: Option<Vec<u8>>,
}

impl Read for ObservedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.seen_at_read.get_or_insert_with(|| self.flushed.borrow().clone());
        self.data.read(buf)
    }
}

#[test]
fn test_get_user_input_prompts_before_reading() {
    let flushed = Rc::new(RefCell::new(Vec::new()));
    let mut output = FlushedOutput {
        pending: Vec::new(),
        flushed: Rc::clone(&flushed),
    };
    let mut input = BufReader::new(ObservedInput {
        data: b"42\n",
        flushed: Rc::clone(&flushed),
        seen_at_read: None,
    });

    let answer = get_user_input_from("Number? ", &mut input, &mut output).unwrap();
    assert_eq!(answer.as_deref(), Some("42"));
    assert_eq!(
        input.get_ref().seen_at_read.as_deref(),
        Some(&b"Number? "[..]),
        "The whole prompt should be flushed before waiting for input."
    );
}

#[test]
fn test_resource_to_file() {
    let text = "copied resource\nwith two lines ✓\n";
    classpath().push(
        MemoryResolver::new("temp-tests")
            .with("temp-tests/source.txt", text)
            .with("temp-tests/empty.txt", ""),
    );

    let path = resource_to_file(Some("temp-tests/source.txt"), "arputil", Some(".txt")).unwrap();
    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("arputil") && file_name.ends_with(".txt"));
    assert_eq!(
        read_file_as_string(&path).unwrap(),
        text,
        "The file should hold the resource exactly."
    );
    assert!(is_pending(&path), "The file should be deleted on exit.");

    let other = resource_to_file(Some("temp-tests/empty.txt"), "arputil", None).unwrap();
    assert_ne!(path, other, "Every call should create a new file.");
    assert!(other.to_string_lossy().ends_with(".tmp"), "The suffix should default to .tmp.");
    assert_eq!(read_file_as_string(&other).unwrap(), "");

    fs::remove_file(path).unwrap();
    fs::remove_file(other).unwrap();
}

#[test]
fn test_resource_to_file_errors() {
    classpath().push(
        MemoryResolver::new("temp-error-tests").with("temp-error-tests/source.txt", "x"),
    );

    let err = resource_to_file(Some("temp-error-tests/source.txt"), "ab", None).unwrap_err();
    assert!(err.is_prefix_length(), "Prefixes shorter than three characters should be rejected.");

    let err = resource_to_file(Some("temp-error-tests/absent.txt"), "arputil", None).unwrap_err();
    assert!(err.is_not_found());
    assert!(resource_to_file(None, "arputil", None).unwrap_err().is_invalid_argument());
}
