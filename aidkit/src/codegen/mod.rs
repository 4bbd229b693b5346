//! Controller generation from route declarations
//!
//! Every [`RouteDeclaration`] becomes one `<identifier>Controller.js` file
//! holding the same async handler skeleton. Only the identifier varies between
//! files; the selected database tables play no part in the output.

use handlebars::Handlebars;
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Result;
use crate::routes::RouteDeclaration;
use crate::writer::GeneratedFile;

pub mod templates;

pub use templates::{CONTROLLER_FILE_NAME, CONTROLLER_TEMPLATE, PLACEHOLDER_QUERY};

/// Renders controller files for route declarations
pub struct ControllerGenerator {
    handlebars: Handlebars<'static>,
}

impl ControllerGenerator {
    /// Create a new generator
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Generating JavaScript, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Render the controller for a single route
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, route: &RouteDeclaration) -> Result<GeneratedFile> {
        let context = json!({
            "identifier": route.identifier(),
            "method": route.method.as_str(),
            "path": route.path,
        });

        let content = self.handlebars.render_template(CONTROLLER_TEMPLATE, &context)?;
        let file_name = self.handlebars.render_template(CONTROLLER_FILE_NAME, &context)?;

        Ok(GeneratedFile {
            path: PathBuf::from(file_name),
            content,
            description: format!("{route} from {}", route.source.display()),
        })
    }

    /// Render controllers for all routes, in order
    ///
    /// Routes whose identifiers collide produce files with the same path; when
    /// written, the later one replaces the earlier. Collisions are logged but
    /// not prevented.
    ///
    /// # Errors
    ///
    /// Returns an error if any template fails to render.
    pub fn generate(&self, routes: &[RouteDeclaration]) -> Result<Vec<GeneratedFile>> {
        let mut seen: HashMap<String, &RouteDeclaration> = HashMap::new();
        let mut files = Vec::with_capacity(routes.len());

        for route in routes {
            let identifier = route.identifier();
            if let Some(previous) = seen.insert(identifier.clone(), route) {
                tracing::warn!(
                    identifier = %identifier,
                    previous = %previous,
                    current = %route,
                    "Routes share an identifier; the later controller replaces the earlier"
                );
            }
            files.push(self.render(route)?);
        }

        tracing::info!(routes = routes.len(), files = seen.len(), "Rendered controllers");
        Ok(files)
    }
}

impl Default for ControllerGenerator {
    fn default() -> Self {
        Self::new()
    }
}
