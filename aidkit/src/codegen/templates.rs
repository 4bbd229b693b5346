//! Handlebars sources for generated backend code

/// Express controller for a single route
///
/// Rendered with `{{identifier}}`. The query is a placeholder the developer
/// replaces by hand; it is not specialized per table.
pub const CONTROLLER_TEMPLATE: &str = r#"
exports.{{identifier}} = async (req, res) => {
    try {
        // Retrieve data from the database based on the route path
        const query = "SELECT * FROM table_name WHERE condition";
        const params = [];
        const result = await execute_query(query, params);

        // Process the retrieved data and send the response
        res.status(200).json({ data: result });
    } catch (error) {
        console.error('Error in {{identifier}}:', error);
        res.status(500).json({ message: 'Internal Server Error' });
    }
};
"#;

/// File name pattern for generated controllers
pub const CONTROLLER_FILE_NAME: &str = "{{identifier}}Controller.js";

/// Placeholder SQL carried by every generated controller
pub const PLACEHOLDER_QUERY: &str = "SELECT * FROM table_name WHERE condition";
