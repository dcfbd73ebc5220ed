use crate::{Script, error::ScriptParseError};

pub trait ScriptParser: Send + Sync {
    fn parse<'a>(&self, content: &'a str) -> Result<Script<'a>, ScriptParseError>;
}
