use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::mem;
use std::path::Path;

/// Reads everything left in `reader` into a [`String`]. No buffering is added on top of what
/// `reader` already does, and `reader` is left open for the caller.
///
/// # Errors
/// Returns any error produced while reading, including [`InvalidData`](io::ErrorKind::InvalidData)
/// if the content isn't valid UTF-8.
pub fn read_all_as_string<R: Read + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Reads every remaining line of `reader`, in order and with line terminators removed. A line ends
/// at `\n`, `\r` or `\r\n`. An empty input produces no lines, and a terminator at the very end
/// doesn't add an empty one. `reader` is left open for the caller.
///
/// # Errors
/// Returns any error produced while reading, or [`InvalidData`](io::ErrorKind::InvalidData) if a
/// line isn't valid UTF-8.
///
/// # Examples
/// ```
/// # use arputil::io::read_all_as_lines;
/// let mut input = "a\nb\r\nc\rd".as_bytes();
/// assert_eq!(read_all_as_lines(&mut input).unwrap(), ["a", "b", "c", "d"]);
/// ```
pub fn read_all_as_lines<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut line = Vec::new();
    // Set after a `\r`, so that a `\n` straight after it isn't taken as another line.
    let mut after_cr = false;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if buf.is_empty() {
            break;
        }

        for &byte in buf {
            match byte {
                b'\n' if after_cr => {},
                b'\n' | b'\r' => lines.push(into_line(mem::take(&mut line))?),
                _ => line.push(byte),
            }
            after_cr = byte == b'\r';
        }

        let len = buf.len();
        reader.consume(len);
    }

    if !line.is_empty() {
        lines.push(into_line(line)?);
    }
    Ok(lines)
}

fn into_line(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Reads the entire text file at `path` into a [`String`]. The file is closed before returning,
/// whether or not reading succeeded.
pub fn read_file_as_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    read_all_as_string(&mut reader)
}
