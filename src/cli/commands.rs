use crate::app::Result;
use crate::domain::GameEntry;
use crate::service::HowLongToBeatService;

pub async fn search(service: &HowLongToBeatService, query: &str, json: bool) -> Result<()> {
    let entries = service.search(query).await?;

    if json {
        println!("{}", to_json(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }

    println!("{} results for \"{}\":", entries.len(), query);
    for entry in &entries {
        println!(
            "  [{}] {} — main {}h, main+extra {}h, completionist {}h (similarity {:.2})",
            entry.id,
            entry.name,
            entry.gameplay_main,
            entry.gameplay_main_extra,
            entry.gameplay_completionist,
            entry.similarity,
        );
    }
    Ok(())
}

pub async fn detail(service: &HowLongToBeatService, id: &str, json: bool) -> Result<()> {
    let entry = service.detail(id).await?;

    if json {
        println!("{}", to_json(&entry)?);
        return Ok(());
    }

    println!("{} [{}]", entry.name, entry.id);
    if !entry.platforms.is_empty() {
        println!("Platforms: {}", entry.platforms.join(", "));
    }
    if !entry.description.is_empty() {
        println!("{}", entry.description);
    }
    println!("Main story:     {} h", entry.gameplay_main);
    println!("Main + sides:   {} h", entry.gameplay_main_extra);
    println!("Completionist:  {} h", entry.gameplay_completionist);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
