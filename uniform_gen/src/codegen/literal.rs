use uniform_types::{Signature, WrapStyle};

use super::helpers::literal_head;

/* Wrap a body into a complete function literal. Pure; the body is not inspected. */
pub fn function_literal(signature: Signature, style: WrapStyle, body: &str) -> String {
    format!(
        "{}\n        {{\n            {}\n        }}",
        literal_head(signature, style),
        body
    )
}
