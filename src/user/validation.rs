use validator::Validate;

use super::types::{CreateUserRequest, NewUser};

const FIELDS: [&str; 2] = ["name", "email"];

const INVALID_EMAIL: &str = "\"email\" must be a valid email";

/// 域名至少两段且每段非空
fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// 校验创建请求，收集全部错误而不是遇到第一个就返回
pub fn validate_new_user(req: CreateUserRequest) -> Result<NewUser, Vec<String>> {
    let mut violations = Vec::new();

    let errors = req.validate().err();
    let field_errors = errors
        .as_ref()
        .map(|e| e.field_errors())
        .unwrap_or_default();
    for field in FIELDS {
        match field_errors.get(field) {
            Some(errs) => {
                for err in errs.iter() {
                    violations.push(
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("\"{}\" is invalid", field)),
                    );
                }
            }
            // validator 接受 user@localhost 这类单段域名，这里额外要求域名带点
            None if field == "email" => {
                if let Some(email) = req.email.as_deref() {
                    if !has_dotted_domain(email) {
                        violations.push(INVALID_EMAIL.to_string());
                    }
                }
            }
            None => {}
        }
    }

    for key in req.extra.keys() {
        violations.push(format!("\"{}\" is not allowed", key));
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    match (req.name, req.email) {
        (Some(name), Some(email)) => Ok(NewUser { name, email }),
        (name, email) => Err(FIELDS
            .iter()
            .zip([name.is_none(), email.is_none()])
            .filter(|(_, missing)| *missing)
            .map(|(field, _)| format!("\"{}\" is required", field))
            .collect()),
    }
}
