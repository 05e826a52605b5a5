use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::RollupError;
use crate::tree::ResultTree;

const INDENT: &[u8] = b"    ";

pub struct JsonOutput;

impl JsonOutput {
    pub fn render(tree: &ResultTree) -> Result<String, RollupError> {
        Self::render_json(tree)
    }

    pub fn print(tree: &ResultTree) -> Result<(), RollupError> {
        let json = Self::render(tree)?;
        Self::write_line(&mut io::stdout().lock(), &json)
            .map_err(|err| RollupError::Output(err.to_string()))
    }

    fn write_line<W: Write>(writer: &mut W, json: &str) -> io::Result<()> {
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    fn render_json<T: Serialize>(value: &T) -> Result<String, RollupError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        value
            .serialize(&mut serializer)
            .map_err(|err| RollupError::Output(err.to_string()))?;
        String::from_utf8(buf).map_err(|err| RollupError::Output(err.to_string()))
    }
}
