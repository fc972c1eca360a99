//! `precheck value`: run a value check on a JSON literal.

use crate::{
   Check, Error, Expect, Result, Value,
   cmd::{parse_check, parse_number, parse_value},
   value::Number,
};

/// Arguments of one `precheck value` invocation, already split out by clap.
#[derive(Debug, Clone, Default)]
pub struct ValueArgs {
   pub check: String,
   pub value: String,
   pub bound: Option<String>,
   pub array: Option<String>,
}

/// Executes the value command against `expect`.
pub fn execute(expect: Expect<'_>, args: &ValueArgs) -> Result<()> {
   let check = parse_check(&args.check)?;
   let value = parse_value(&args.value);
   let bound = args.bound.as_deref().map(parse_number).transpose()?;
   let array = args.array.as_deref().map(parse_value);

   run(expect, check, &value, bound, array.as_ref())?;
   tracing::debug!(%check, "check passed");
   Ok(())
}

/// Dispatches `check` over already-parsed inputs.
pub fn run(
   expect: Expect<'_>,
   check: Check,
   value: &Value,
   bound: Option<Number>,
   array: Option<&Value>,
) -> Result<()> {
   match check {
      Check::IsTrue => expect.is_true(require_bool(check, value)?),
      Check::IsFalse => expect.is_false(require_bool(check, value)?),
      Check::IsNotEmpty => expect.is_not_empty(value),
      Check::IsNumeric => expect.is_numeric(value),
      Check::IsInt => expect.is_int(value),
      Check::IsFloat => expect.is_float(value),
      Check::IsBool => expect.is_bool(value),
      Check::IsObject => expect.is_object(value),
      Check::IsString => expect.is_string(value),
      Check::IsArray => expect.is_array(value),
      Check::IsNull => expect.is_null(value),
      Check::IsNotNull => expect.is_not_null(value),
      Check::IsLowerThan => expect.is_lower_than(value, require_bound(check, bound)?),
      Check::IsLowerThanOrEqual => {
         expect.is_lower_than_or_equal(value, require_bound(check, bound)?)
      },
      Check::IsGreaterThan => expect.is_greater_than(value, require_bound(check, bound)?),
      Check::IsGreaterThanOrEqual => {
         expect.is_greater_than_or_equal(value, require_bound(check, bound)?)
      },
      Check::IsCallable => expect.is_callable(value),
      Check::IsInvokable => expect.is_invokable(value),
      Check::HasArrayValue => expect.has_array_value(value, require_array(check, array)?),
      Check::HasArrayKey => expect.has_array_key(value, require_array(check, array)?),
      Check::IsCountable => expect.is_countable(value),
      Check::IsIterable => expect.is_iterable(value),
      Check::IsResource => expect.is_resource(value),
      Check::IsNotFalse => expect.is_not_false(value),
      Check::IsNotTrue => expect.is_not_true(value),
      Check::IsInstanceOf | Check::IsSubclassOf | Check::IsIterableOf => {
         Err(Error::Usage(format!("{check} needs a class and cannot run from the command line")))
      },
      Check::IsFile
      | Check::IsReadableFile
      | Check::IsWritableFile
      | Check::IsPath
      | Check::IsReadablePath
      | Check::IsWritablePath => {
         Err(Error::Usage(format!("{check} takes a path; use `precheck path {check} <PATH>`")))
      },
   }
}

fn require_bool(check: Check, value: &Value) -> Result<bool> {
   match value {
      Value::Bool(b) => Ok(*b),
      other => Err(Error::Usage(format!(
         "{check} takes true or false, got {}",
         other.type_name()
      ))),
   }
}

fn require_bound(check: Check, bound: Option<Number>) -> Result<Number> {
   bound.ok_or_else(|| Error::Usage(format!("{check} requires --bound")))
}

fn require_array(check: Check, array: Option<&Value>) -> Result<&Value> {
   match array {
      Some(array) if array.is_array() => Ok(array),
      Some(other) => Err(Error::Usage(format!(
         "{check} requires --array to be a JSON array or object, got {}",
         other.type_name()
      ))),
      None => Err(Error::Usage(format!("{check} requires --array"))),
   }
}
