use crate::markdown::paragraphs;
use crate::traverser::OpenApiTraverser;
use crate::types::{ExternalDocs, Info, Server, Tag};
use crate::{EXTERNAL_DOCS_FIELD, INFO_FIELD, SERVERS_FIELD, TAGS_FIELD};

const DEFAULT_TITLE: &str = "API Documentation";
const DEFAULT_EXTERNAL_DOCS_DESCRIPTION: &str = "Additional documentation";

fn info(traverser: &OpenApiTraverser) -> Option<Info<'_>> {
    traverser
        .specification()
        .get(INFO_FIELD)
        .filter(|info| info.is_object())
        .map(Info::new)
}

pub(crate) fn title(traverser: &OpenApiTraverser) -> String {
    let info = info(traverser);
    let title = info.and_then(|info| info.title()).unwrap_or(DEFAULT_TITLE);
    match info.and_then(|info| info.version()) {
        Some(version) => format!("# {} (v{})", title, version),
        None => format!("# {}", title),
    }
}

pub(crate) fn description(traverser: &OpenApiTraverser) -> String {
    info(traverser)
        .and_then(|info| info.description())
        .unwrap_or_default()
        .to_string()
}

pub(crate) fn contact(traverser: &OpenApiTraverser) -> String {
    let contact = match info(traverser).and_then(|info| info.contact()) {
        Some(contact) => contact,
        None => return String::new(),
    };

    let mut parts = vec![String::from("## Contact")];
    if let Some(name) = contact.name() {
        parts.push(format!("**Name**: {}", name));
    }
    if let Some(email) = contact.email() {
        parts.push(format!("**Email**: {}", email));
    }
    if let Some(url) = contact.url() {
        parts.push(format!("**URL**: {}", url));
    }
    paragraphs(parts)
}

pub(crate) fn license(traverser: &OpenApiTraverser) -> String {
    let license = match info(traverser).and_then(|info| info.license()) {
        Some(license) => license,
        None => return String::new(),
    };

    let line = match (license.name(), license.url()) {
        (Some(name), Some(url)) => format!("**{}** - {}", name, url),
        (Some(name), None) => format!("**{}**", name),
        (None, Some(url)) => url.to_string(),
        (None, None) => String::new(),
    };
    paragraphs([String::from("## License"), line])
}

pub(crate) fn external_docs(traverser: &OpenApiTraverser) -> String {
    let docs = traverser
        .specification()
        .get(EXTERNAL_DOCS_FIELD)
        .filter(|docs| docs.is_object())
        .map(ExternalDocs::new);
    let (docs, url) = match docs.and_then(|docs| docs.url().map(|url| (docs, url))) {
        Some(found) => found,
        None => return String::new(),
    };

    let description = docs
        .description()
        .unwrap_or(DEFAULT_EXTERNAL_DOCS_DESCRIPTION);
    format!("## External Documentation\n\n{}: {}", description, url)
}

pub(crate) fn servers(traverser: &OpenApiTraverser) -> String {
    let servers = match OpenApiTraverser::get_as_array(traverser.specification(), SERVERS_FIELD) {
        Ok(servers) => servers,
        Err(_) => return String::new(),
    };

    let mut lines = Vec::new();
    for server in servers.iter().map(Server::new) {
        let url = match server.url() {
            Some(url) => url,
            None => continue,
        };
        match server.description() {
            Some(description) => lines.push(format!("- {} - {}", url, description)),
            None => lines.push(format!("- {}", url)),
        }

        for (name, variable) in server.variables() {
            let mut line = format!("  - `{}`", name);
            if let Some(description) = variable.description() {
                line.push_str(&format!(": {}", description));
            }
            if let Some(default) = variable.default_value() {
                line.push_str(&format!(" (default: `{}`)", default));
            }
            lines.push(line);
        }
    }

    if lines.is_empty() {
        return String::new();
    }
    format!("## Servers\n\n{}", lines.join("\n"))
}

pub(crate) fn tags(traverser: &OpenApiTraverser) -> String {
    let tags = match OpenApiTraverser::get_as_array(traverser.specification(), TAGS_FIELD) {
        Ok(tags) => tags,
        Err(_) => return String::new(),
    };

    let mut parts = Vec::new();
    for tag in tags.iter().map(Tag::new) {
        let name = match tag.name() {
            Some(name) => name,
            None => continue,
        };
        parts.push(format!("### {}", name));
        if let Some(description) = tag.description() {
            parts.push(description.to_string());
        }
        if let Some(url) = tag.external_docs().and_then(|docs| docs.url()) {
            parts.push(format!("External Docs: {}", url));
        }
    }

    if parts.is_empty() {
        return String::new();
    }
    parts.insert(0, String::from("## Tags"));
    paragraphs(parts)
}

#[cfg(test)]
mod tests {
    use crate::markdown::document::{
        contact, description, external_docs, license, servers, tags, title,
    };
    use crate::traverser::OpenApiTraverser;
    use serde_json::json;

    fn traverser(spec: serde_json::Value) -> OpenApiTraverser {
        OpenApiTraverser::new(spec).unwrap()
    }

    #[test]
    fn test_title_with_version() {
        let spec = traverser(json!({"info": {"title": "Pet Store", "version": "1.0.0"}}));
        assert_eq!(title(&spec), "# Pet Store (v1.0.0)");
    }

    #[test]
    fn test_title_defaults_without_info() {
        assert_eq!(title(&traverser(json!({}))), "# API Documentation");
        let spec = traverser(json!({"info": {"version": "3"}}));
        assert_eq!(title(&spec), "# API Documentation (v3)");
    }

    #[test]
    fn test_description_verbatim() {
        let spec = traverser(json!({"info": {"description": "Line one.\n\n*Line two.*"}}));
        assert_eq!(description(&spec), "Line one.\n\n*Line two.*");
        assert_eq!(description(&traverser(json!({}))), "");
    }

    #[test]
    fn test_contact_with_present_fields_only() {
        let spec = traverser(json!({
            "info": {"contact": {"name": "API Support", "url": "https://example.com/support"}}
        }));
        assert_eq!(
            contact(&spec),
            "## Contact\n\n**Name**: API Support\n\n**URL**: https://example.com/support"
        );
    }

    #[test]
    fn test_contact_with_all_fields() {
        let spec = traverser(json!({
            "info": {"contact": {
                "name": "API Support",
                "email": "support@example.com",
                "url": "https://example.com/support"
            }}
        }));
        assert_eq!(
            contact(&spec),
            "## Contact\n\n**Name**: API Support\n\n**Email**: support@example.com\n\n**URL**: https://example.com/support"
        );
    }

    #[test]
    fn test_contact_omitted_without_contact_object() {
        assert_eq!(contact(&traverser(json!({"info": {"title": "x"}}))), "");
    }

    #[test]
    fn test_license_with_url() {
        let spec = traverser(json!({
            "info": {"license": {"name": "Apache 2.0", "url": "https://www.apache.org/licenses/LICENSE-2.0.html"}}
        }));
        assert_eq!(
            license(&spec),
            "## License\n\n**Apache 2.0** - https://www.apache.org/licenses/LICENSE-2.0.html"
        );
    }

    #[test]
    fn test_license_without_url() {
        let spec = traverser(json!({"info": {"license": {"name": "MIT"}}}));
        assert_eq!(license(&spec), "## License\n\n**MIT**");
        assert_eq!(license(&traverser(json!({"info": {}}))), "");
    }

    #[test]
    fn test_external_docs_default_description() {
        let spec = traverser(json!({"externalDocs": {"url": "https://docs.example.com"}}));
        assert_eq!(
            external_docs(&spec),
            "## External Documentation\n\nAdditional documentation: https://docs.example.com"
        );
    }

    #[test]
    fn test_external_docs_with_description() {
        let spec = traverser(json!({
            "externalDocs": {"description": "Find out more", "url": "https://docs.example.com"}
        }));
        assert_eq!(
            external_docs(&spec),
            "## External Documentation\n\nFind out more: https://docs.example.com"
        );
        assert_eq!(external_docs(&traverser(json!({"externalDocs": {}}))), "");
    }

    #[test]
    fn test_servers_with_variables() {
        let spec = traverser(json!({
            "servers": [
                {
                    "url": "https://{region}.example.com",
                    "description": "Production",
                    "variables": {
                        "region": {"default": "eu", "description": "Deployment region"}
                    }
                },
                {"url": "http://localhost:8080"}
            ]
        }));
        assert_eq!(
            servers(&spec),
            "## Servers\n\n\
             - https://{region}.example.com - Production\n  \
             - `region`: Deployment region (default: `eu`)\n\
             - http://localhost:8080"
        );
    }

    #[test]
    fn test_servers_omitted_when_empty() {
        assert_eq!(servers(&traverser(json!({"servers": []}))), "");
        assert_eq!(servers(&traverser(json!({}))), "");
    }

    #[test]
    fn test_tags_in_declaration_order() {
        let spec = traverser(json!({
            "tags": [
                {
                    "name": "pets",
                    "description": "Everything about your pets",
                    "externalDocs": {"url": "https://example.com/pets"}
                },
                {"name": "store"}
            ]
        }));
        assert_eq!(
            tags(&spec),
            "## Tags\n\n### pets\n\nEverything about your pets\n\n\
             External Docs: https://example.com/pets\n\n### store"
        );
    }

    #[test]
    fn test_tags_omitted_when_absent() {
        assert_eq!(tags(&traverser(json!({}))), "");
        assert_eq!(tags(&traverser(json!({"tags": []}))), "");
    }
}
