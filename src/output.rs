use crate::cli::OutputFormat;
use crate::config::Context;
use crate::models::Pet;
use crate::response::{ApiResponse, ResponseBody};
use console::{Style, style};
use serde::Serialize;
use tabled::{Table, Tabled};

/// One row of the pet table.
#[derive(Tabled, Serialize)]
pub struct PetRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub animal_type: String,
    #[tabled(rename = "Age")]
    pub age: String,
    #[tabled(rename = "Photo")]
    pub photo: String,
}

impl From<&Pet> for PetRow {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            animal_type: pet.animal_type.clone(),
            age: pet.age.clone(),
            photo: if pet.has_photo() { "yes" } else { "-" }.to_string(),
        }
    }
}

/// Print data as a table
pub fn print_table<T: Tabled>(data: Vec<T>) {
    if data.is_empty() {
        println!("{}", style("No pets found").dim());
        return;
    }
    let table = Table::new(data).to_string();
    println!("{}", table);
}

/// Print data as JSON
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print a listing based on format preference
pub fn print_pets(ctx: &Context, pets: &[Pet]) -> anyhow::Result<()> {
    match ctx.output_format() {
        OutputFormat::Table => print_table(pets.iter().map(PetRow::from).collect()),
        OutputFormat::Json => print_json(&pets)?,
    }
    Ok(())
}

/// Print the status line and the body of a raw response.
pub fn print_response(ctx: &Context, response: &ApiResponse) -> anyhow::Result<()> {
    match ctx.output_format() {
        OutputFormat::Table => {
            println!("{}", format_status(response.status_code()));
            println!("{}", format_body(&response.body)?);
        }
        OutputFormat::Json => {
            let body = match &response.body {
                ResponseBody::Json(value) => value.clone(),
                ResponseBody::Text(text) => serde_json::Value::String(text.clone()),
            };
            print_json(&serde_json::json!({
                "status": response.status_code(),
                "body": body,
            }))?;
        }
    }
    Ok(())
}

/// Pretty JSON, or the raw text for non-JSON bodies.
pub fn format_body(body: &ResponseBody) -> anyhow::Result<String> {
    Ok(match body {
        ResponseBody::Json(value) => serde_json::to_string_pretty(value)?,
        ResponseBody::Text(text) => text.clone(),
    })
}

/// Style for an HTTP status code
pub fn status_style(status: u16) -> Style {
    match status {
        200..=299 => Style::new().green(),
        400..=499 => Style::new().yellow(),
        500..=599 => Style::new().red().bold(),
        _ => Style::new(),
    }
}

/// Format a status with appropriate color
pub fn format_status(status: u16) -> String {
    let text = format!("HTTP {}", status);
    status_style(status).apply_to(text).to_string()
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print an info message
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
