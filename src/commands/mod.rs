pub mod emit;

use crate::error::Result;

pub trait Command {
    fn execute(&self) -> Result<()>;
}
