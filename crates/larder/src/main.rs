//! `larder` - CLI for the larder recipe manager
//!
//! This binary is the presentation layer: it renders state snapshots from the
//! per-screen view models and forwards user intents to them.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::bail;
use clap::Parser;

use larder::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, EditCommand, ListCommand, ShowCommand,
    TypesCommand,
};
use larder::model::{AddEditRecipeModel, RecipeDetailModel, RecipeListModel, SaveOutcome};
use larder::recipe::Recipe;
use larder::{init_logging, Config, ImageStore, Repository, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Config commands don't need the database
    let command = match cli.command {
        Command::Config(cmd) => return handle_config(&config, &cmd),
        other => other,
    };

    let storage = Storage::open(config.database_path())?;
    let repo = Repository::new(storage, config.recipe_types_path());
    let images = ImageStore::new(config.images_dir())?;

    match command {
        Command::List(cmd) => handle_list(repo, &cmd).await,
        Command::Show(cmd) => handle_show(repo, &cmd).await,
        Command::Add(cmd) => handle_add(repo, images, &cmd).await,
        Command::Edit(cmd) => handle_edit(repo, images, &cmd).await,
        Command::Delete(cmd) => handle_delete(repo, &cmd).await,
        Command::Types(cmd) => handle_types(&repo, &cmd),
        Command::Config(_) => unreachable!("handled above"),
    }
}

async fn handle_list(repo: Repository, cmd: &ListCommand) -> anyhow::Result<()> {
    let mut model = RecipeListModel::init(repo).await?;
    model.on_filter_changed(cmd.recipe_type.clone());

    let visible = model.state().visible_recipes();
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        match &model.state().selected_type {
            Some(t) => println!("No recipes of type \"{t}\"."),
            None => println!("No recipes yet."),
        }
        return Ok(());
    }

    for recipe in visible {
        let photo = if recipe.image_path().is_some() {
            "  [photo]"
        } else {
            ""
        };
        println!("{:>4}  {} ({}){photo}", recipe.id, recipe.name, recipe.recipe_type);
    }
    Ok(())
}

async fn handle_show(repo: Repository, cmd: &ShowCommand) -> anyhow::Result<()> {
    let model = RecipeDetailModel::init(repo, cmd.id).await?;

    let Some(recipe) = &model.state().recipe else {
        bail!("recipe {} not found", cmd.id);
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
    } else {
        print_recipe(recipe);
    }
    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{} ({})  #{}", recipe.name, recipe.recipe_type, recipe.id);
    if let Some(path) = recipe.image_path() {
        println!("Photo: {path}");
    }
    println!();
    println!("Ingredients:");
    println!("{}", recipe.ingredients);
    println!();
    println!("Steps:");
    println!("{}", recipe.steps);
}

async fn handle_add(
    repo: Repository,
    images: ImageStore,
    cmd: &AddCommand,
) -> anyhow::Result<()> {
    let mut model = AddEditRecipeModel::init(repo, images, None).await?;

    model.on_name_changed(cmd.name.as_str());
    model.on_type_changed(cmd.recipe_type.as_str());
    model.on_ingredients_changed(cmd.ingredients.as_str());
    model.on_steps_changed(cmd.steps.as_str());
    if let Some(image) = &cmd.image {
        model.on_image_selected(Some(&image.to_string_lossy()));
    }

    match model.save().await? {
        SaveOutcome::Inserted(id) => {
            println!("Added recipe {}: {}", id, cmd.name);
            Ok(())
        }
        SaveOutcome::Invalid => {
            bail!("name, type, ingredients, and steps must all be non-blank")
        }
        SaveOutcome::Updated(_) => unreachable!("add never updates"),
    }
}

async fn handle_edit(
    repo: Repository,
    images: ImageStore,
    cmd: &EditCommand,
) -> anyhow::Result<()> {
    let mut model = AddEditRecipeModel::init(repo, images, Some(cmd.id)).await?;
    if !model.state().is_edit {
        bail!("recipe {} not found", cmd.id);
    }

    if let Some(name) = &cmd.name {
        model.on_name_changed(name.as_str());
    }
    if let Some(recipe_type) = &cmd.recipe_type {
        model.on_type_changed(recipe_type.as_str());
    }
    if let Some(ingredients) = &cmd.ingredients {
        model.on_ingredients_changed(ingredients.as_str());
    }
    if let Some(steps) = &cmd.steps {
        model.on_steps_changed(steps.as_str());
    }
    if let Some(image) = &cmd.image {
        model.on_image_selected(Some(&image.to_string_lossy()));
    }

    match model.save().await? {
        SaveOutcome::Updated(id) => {
            println!("Updated recipe {id}");
            Ok(())
        }
        SaveOutcome::Invalid => {
            bail!("name, type, ingredients, and steps must all be non-blank")
        }
        SaveOutcome::Inserted(_) => unreachable!("edit never inserts"),
    }
}

async fn handle_delete(repo: Repository, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let mut model = RecipeDetailModel::init(repo, cmd.id).await?;
    if model.state().recipe.is_none() {
        bail!("recipe {} not found", cmd.id);
    }

    model.on_delete().await?;
    println!("Deleted recipe {}", cmd.id);
    Ok(())
}

fn handle_types(repo: &Repository, cmd: &TypesCommand) -> anyhow::Result<()> {
    let types = repo.recipe_types()?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&types)?);
    } else {
        for t in types {
            println!("{t}");
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:   {}", config.database_path().display());
                println!();
                println!("[Images]");
                println!("  Image directory: {}", config.images_dir().display());
                println!();
                println!("[Vocabulary]");
                match config.recipe_types_path() {
                    Some(path) => println!("  Types file:      {}", path.display()),
                    None => println!("  Types file:      (built-in)"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.clone().unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
