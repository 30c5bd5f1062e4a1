//! Command-line interface
//!
//! Without a subcommand the terminal UI starts. Subcommands talk to the API
//! once and print the result.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::app::validate_fields;
use crate::constants::BASE_URL_ENV;
use crate::models::{Student, StudentId};
use crate::network::StudentService;

#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about = "Manage student records from the terminal")]
pub struct Args {
    /// Server origin, e.g. http://localhost:8080
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Config file (default: ~/.rollcall/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List all students
    List,
    /// Show one student as JSON
    Show { id: StudentId },
    /// Create a student
    Add(StudentFields),
    /// Replace a student's fields
    Update {
        id: StudentId,
        #[command(flatten)]
        fields: StudentFields,
    },
    /// Delete a student
    Delete { id: StudentId },
}

/// Raw field text, validated the same way as the form
#[derive(clap::Args, Debug, Clone, PartialEq, Default)]
pub struct StudentFields {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub age: String,
    #[arg(long, default_value = "")]
    pub email: String,
}

/// Execute one subcommand, writing human-readable output to `out`
pub async fn run_command(service: &StudentService, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::List => {
            let students = service.get_all_students().await?;
            writeln!(out, "Student List ({})", students.len())?;
            if students.is_empty() {
                writeln!(out, "No students found. Add a new student to get started!")?;
            }
            for student in &students {
                write_row(out, student)?;
            }
        }
        Command::Show { id } => {
            let student = service.get_student(id).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&student)?)?;
        }
        Command::Add(fields) => {
            let draft = validate_fields(&fields.name, &fields.age, &fields.email)?;
            let student = service.create_student(&draft).await?;
            writeln!(out, "Student added successfully!")?;
            write_row(out, &student)?;
        }
        Command::Update { id, fields } => {
            let draft = validate_fields(&fields.name, &fields.age, &fields.email)?;
            let student = service.update_student(id, &draft).await?;
            writeln!(out, "Student updated successfully!")?;
            write_row(out, &student)?;
        }
        Command::Delete { id } => {
            service.delete_student(id).await?;
            writeln!(out, "Student deleted successfully!")?;
        }
    }
    Ok(())
}

fn write_row(out: &mut impl Write, student: &Student) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>6}  {:<24}  {:>3}  {}",
        student.id, student.name, student.age, student.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let args = Args::try_parse_from([
            "rollcall", "add", "--name", "Ada", "--age", "36", "--email", "ada@x.com",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Add(StudentFields {
                name: "Ada".into(),
                age: "36".into(),
                email: "ada@x.com".into(),
            }))
        );
    }

    #[test]
    fn test_parse_update_and_flags() {
        let args = Args::try_parse_from([
            "rollcall", "--base-url", "http://h:1", "update", "4", "--name", "B",
        ])
        .unwrap();
        assert_eq!(args.base_url.as_deref(), Some("http://h:1"));
        match args.command {
            Some(Command::Update { id, fields }) => {
                assert_eq!(id, 4);
                assert_eq!(fields.name, "B");
                assert!(fields.age.is_empty());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_no_command_means_tui() {
        let args = Args::try_parse_from(["rollcall"]).unwrap();
        assert!(args.command.is_none());
    }
}
