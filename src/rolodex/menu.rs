//! The interactive numbered menu.
//!
//! A plain REPL over stdin: show the menu, read a choice, run the matching
//! flow. Operation failures are printed and the loop continues; only a broken
//! stdin/stdout ends the session, and that ends it with the farewell rather
//! than an error.

use colored::*;
use rolodex::api::{CmdMessage, ContactInput, MessageLevel, RolodexApi};
use rolodex::error::{Result, RolodexError};
use rolodex::model::Contact;
use rolodex::store::ContactStore;
use std::io::{self, BufRead, Write};

pub fn run<S: ContactStore>(api: &mut RolodexApi<S>, input: impl BufRead) -> Result<()> {
    let mut lines = input.lines();
    println!("Welcome to Rolodex!");

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice (1-7): ")? else {
            println!();
            break;
        };

        match choice.as_str() {
            "1" => {
                if !add_flow(api, &mut lines)? {
                    break;
                }
            }
            "2" => {
                if !search_flow(api, &mut lines)? {
                    break;
                }
            }
            "3" => {
                if !update_flow(api, &mut lines)? {
                    break;
                }
            }
            "4" => {
                if !delete_flow(api, &mut lines)? {
                    break;
                }
            }
            "5" => list_all(api),
            "6" => show_stats(api),
            "7" => break,
            _ => println!(
                "{}",
                "Invalid choice! Please enter a number between 1-7.".red()
            ),
        }
    }

    println!("\nThank you for using Rolodex. Goodbye!");
    Ok(())
}

/// Returns `Ok(None)` once stdin is exhausted.
fn prompt<R: BufRead>(lines: &mut io::Lines<R>, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush().map_err(RolodexError::Io)?;
    match lines.next() {
        Some(line) => Ok(Some(line.map_err(RolodexError::Io)?.trim().to_string())),
        None => Ok(None),
    }
}

fn add_flow<S: ContactStore, R: BufRead>(
    api: &mut RolodexApi<S>,
    lines: &mut io::Lines<R>,
) -> Result<bool> {
    println!("\n--- ADD NEW CONTACT ---");
    let Some(name) = prompt(lines, "Enter name: ")? else {
        return Ok(false);
    };
    let Some(phone) = prompt(lines, "Enter phone number: ")? else {
        return Ok(false);
    };
    let Some(email) = prompt(lines, "Enter email (optional): ")? else {
        return Ok(false);
    };
    let Some(address) = prompt(lines, "Enter address (optional): ")? else {
        return Ok(false);
    };

    match api.add_contact(&ContactInput::new(name, phone, email, address)) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(true)
}

fn search_flow<S: ContactStore, R: BufRead>(
    api: &RolodexApi<S>,
    lines: &mut io::Lines<R>,
) -> Result<bool> {
    println!("\n--- SEARCH CONTACTS ---");
    let Some(term) = prompt(lines, "Enter search term: ")? else {
        return Ok(false);
    };

    match api.search_contacts(&term) {
        Ok(result) => {
            if result.listed.is_empty() {
                println!("No contacts found matching your search.");
            } else {
                println!("\nFound {} contact(s):", result.listed.len());
                println!("{}", "-".repeat(40));
                for contact in &result.listed {
                    print_contact(contact);
                    println!("{}", "-".repeat(40));
                }
            }
        }
        Err(e) => print_error(&e),
    }
    Ok(true)
}

fn update_flow<S: ContactStore, R: BufRead>(
    api: &mut RolodexApi<S>,
    lines: &mut io::Lines<R>,
) -> Result<bool> {
    println!("\n--- UPDATE CONTACT ---");
    let Some(name) = prompt(lines, "Enter name of contact to update: ")? else {
        return Ok(false);
    };

    let current = match api.get_contact(&name) {
        Ok(contact) => contact,
        Err(e) => {
            print_error(&e);
            return Ok(true);
        }
    };

    println!("\nUpdating contact: {}", current.name);
    println!("Press Enter to keep the current value, or type a new one:");

    let Some(new_name) = prompt(lines, &format!("Name ({}): ", current.name))? else {
        return Ok(false);
    };
    let Some(new_phone) = prompt(lines, &format!("Phone ({}): ", current.phone))? else {
        return Ok(false);
    };
    let Some(new_email) = prompt(lines, &format!("Email ({}): ", current.email))? else {
        return Ok(false);
    };
    let Some(new_address) = prompt(lines, &format!("Address ({}): ", current.address))? else {
        return Ok(false);
    };

    let keep = |entered: String, current: &str| {
        if entered.is_empty() {
            current.to_string()
        } else {
            entered
        }
    };
    let input = ContactInput::new(
        keep(new_name, &current.name),
        keep(new_phone, &current.phone),
        keep(new_email, &current.email),
        keep(new_address, &current.address),
    );

    match api.update_contact(&current.name, &input) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(true)
}

fn delete_flow<S: ContactStore, R: BufRead>(
    api: &mut RolodexApi<S>,
    lines: &mut io::Lines<R>,
) -> Result<bool> {
    println!("\n--- DELETE CONTACT ---");
    let Some(name) = prompt(lines, "Enter name of contact to delete: ")? else {
        return Ok(false);
    };

    let contact = match api.get_contact(&name) {
        Ok(contact) => contact,
        Err(e) => {
            print_error(&e);
            return Ok(true);
        }
    };

    let confirm = prompt(
        lines,
        &format!("Are you sure you want to delete '{}'? (y/N): ", contact.name),
    )?;
    let Some(confirm) = confirm else {
        return Ok(false);
    };

    let confirm = confirm.to_lowercase();
    if confirm == "y" || confirm == "yes" {
        match api.delete_contact(&contact.name) {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_error(&e),
        }
    } else {
        println!("Deletion cancelled.");
    }
    Ok(true)
}

fn list_all<S: ContactStore>(api: &RolodexApi<S>) {
    match api.list_contacts() {
        Ok(result) => {
            if result.listed.is_empty() {
                println!("No contacts found.");
                return;
            }
            println!("\n{}", "=".repeat(60));
            println!("{:^60}", "ALL CONTACTS");
            println!("{}", "=".repeat(60));
            for contact in &result.listed {
                print_contact(contact);
                println!("{}", "-".repeat(60));
            }
        }
        Err(e) => print_error(&e),
    }
}

fn show_stats<S: ContactStore>(api: &RolodexApi<S>) {
    match api.stats() {
        Ok(result) => {
            let stats = result.stats.unwrap_or_default();
            println!("\n--- CONTACT STATISTICS ---");
            println!("Total contacts: {}", stats.total);
            if stats.total > 0 {
                println!("Contacts with email: {}", stats.with_email);
                println!("Contacts with address: {}", stats.with_address);
            }
        }
        Err(e) => print_error(&e),
    }
}

fn print_menu() {
    println!("\n{}", "=".repeat(50));
    println!("{:^50}", "ROLODEX CONTACT BOOK");
    println!("{}", "=".repeat(50));
    println!("1. Add Contact");
    println!("2. Search Contacts");
    println!("3. Update Contact");
    println!("4. Delete Contact");
    println!("5. List All Contacts");
    println!("6. Contact Statistics");
    println!("7. Exit");
    println!("{}", "=".repeat(50));
}

fn print_contact(contact: &Contact) {
    println!("Name: {}", contact.name);
    println!("Phone: {}", contact.phone);
    println!("Email: {}", or_na(&contact.email));
    println!("Address: {}", or_na(&contact.address));
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_error(e: &RolodexError) {
    println!("{}", format!("Error: {}", e).red());
}
