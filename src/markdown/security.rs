use crate::markdown::paragraphs;
use crate::traverser::OpenApiTraverser;
use crate::types::SecurityRequirement;
use crate::types::operation::security_requirements;

const NO_AUTHENTICATION: &str = "No authentication required.";

/// One bullet per scheme of a requirement, indented by `indent`.
///
/// An empty requirement object has no schemes and yields no bullets.
fn scheme_bullets(requirement: &SecurityRequirement<'_>, indent: &str) -> Vec<String> {
    requirement
        .schemes()
        .into_iter()
        .map(|(name, scopes)| {
            if scopes.is_empty() {
                format!("{}- **{}**", indent, name)
            } else {
                format!("{}- **{}** (scopes: {})", indent, name, scopes.join(", "))
            }
        })
        .collect()
}

/// The document-wide `security` section.
pub(crate) fn document_security(traverser: &OpenApiTraverser) -> String {
    let requirements = match security_requirements(traverser.specification()) {
        Some(requirements) if !requirements.is_empty() => requirements,
        _ => return String::new(),
    };

    let mut parts = vec![String::from("## Security")];
    for (index, requirement) in requirements.iter().enumerate() {
        parts.push(format!("### Requirement {}", index + 1));
        parts.push(scheme_bullets(requirement, "").join("\n"));
    }
    paragraphs(parts)
}

/// The security block of a single endpoint.
///
/// Only the requirements declared on the operation are printed; the
/// document-wide requirements are not merged in.
pub(crate) fn endpoint_security(requirements: &[SecurityRequirement<'_>]) -> String {
    if requirements.is_empty() {
        return format!("#### Security\n\n{}", NO_AUTHENTICATION);
    }

    let mut lines = Vec::new();
    for (index, requirement) in requirements.iter().enumerate() {
        lines.push(format!("- Requirement {}:", index + 1));
        lines.extend(scheme_bullets(requirement, "  "));
    }
    format!("#### Security\n\n{}", lines.join("\n"))
}
