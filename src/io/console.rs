use std::io::{self, BufRead, Write};

/// Prints `prompt` to standard output and reads one line from standard input, without its line
/// terminator. Returns `None` if standard input has already reached its end.
///
/// The prompt is printed as given, so include a trailing space or newline if one is wanted.
/// Standard output is only locked while the prompt is written, not while waiting for input, and
/// standard input stays usable afterwards.
pub fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    write_prompt(prompt, &mut io::stdout().lock())?;
    read_input_line(&mut io::stdin().lock())
}

/// The same as [`get_user_input`], reading from `input` and writing the prompt to `output`. The
/// prompt is flushed before anything is read.
///
/// # Examples
/// ```
/// # use arputil::io::get_user_input_from;
/// let mut output = Vec::new();
/// let mut input = "Ada\nrest".as_bytes();
/// let answer = get_user_input_from("Name? ", &mut input, &mut output).unwrap();
/// assert_eq!(answer.as_deref(), Some("Ada"));
/// assert_eq!(output, b"Name? ");
/// ```
pub fn get_user_input_from<R, W>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write_prompt(prompt, output)?;
    read_input_line(input)
}

fn write_prompt<W: Write + ?Sized>(prompt: &str, output: &mut W) -> io::Result<()> {
    output.write_all(prompt.as_bytes())?;
    output.flush()
}

fn read_input_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
