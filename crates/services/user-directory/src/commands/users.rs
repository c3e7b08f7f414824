//! User commands - list, add, edit, delete and stats.

use common::{AppError, AppResult};
use domain::{User, UserForm, UserRole, UserStatus};
use uuid::Uuid;

use crate::cli::{AddArgs, EditArgs, ListArgs};
use crate::edit::EditField;
use crate::service::UserManager;
use crate::view::{parse_role_filter, parse_status_filter, SortDirection, UserQuery, UserStats};

/// Execute the list command
pub fn list(manager: &UserManager, args: ListArgs) -> AppResult<()> {
    let query = build_query(&args)?;
    let rows = manager.query(&query);
    tracing::debug!("{} of {} users match", rows.len(), manager.users().len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_table(&rows));
    }
    Ok(())
}

/// Execute the add command
pub fn add(manager: &mut UserManager, args: AddArgs) -> AppResult<()> {
    let photo = match args.photo.as_deref() {
        Some(value) => Some(manager.prepare_photo_arg(value)?),
        None => None,
    };
    let form = UserForm::new(args.name, args.email, args.role, args.status);

    let user = manager.add_user(form, photo)?;
    println!("Created user {}", user.id);
    Ok(())
}

/// Execute the edit command: stage every given field, then commit.
pub fn edit(manager: &mut UserManager, args: EditArgs) -> AppResult<()> {
    manager.begin_edit(args.id)?;

    for field in edit_fields(manager, args)? {
        manager.stage(field)?;
    }

    if !manager.has_pending_changes() {
        manager.cancel_edit();
        println!("Nothing to change");
        return Ok(());
    }

    let user = manager.commit_edit()?;
    println!("Updated user {}", user.id);
    Ok(())
}

/// Execute the delete command
pub fn delete(manager: &mut UserManager, id: Uuid) -> AppResult<()> {
    manager.delete_user(id)?;
    println!("Deleted user {}", id);
    Ok(())
}

/// Execute the stats command
pub fn stats(manager: &UserManager) -> AppResult<()> {
    print!("{}", render_stats(&manager.stats()));
    Ok(())
}

fn build_query(args: &ListArgs) -> AppResult<UserQuery> {
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    Ok(UserQuery::new()
        .search(args.search.as_str())
        .role(parse_role_filter(&args.role)?)
        .status(parse_status_filter(&args.status)?)
        .sort_by(args.sort.parse()?, direction))
}

fn edit_fields(manager: &UserManager, args: EditArgs) -> AppResult<Vec<EditField>> {
    let mut fields = Vec::new();

    if let Some(name) = args.name {
        fields.push(EditField::Name(name));
    }
    if let Some(email) = args.email {
        fields.push(EditField::Email(email));
    }
    if let Some(role) = args.role {
        fields.push(EditField::Role(role.parse::<UserRole>().map_err(AppError::from)?));
    }
    if let Some(status) = args.status {
        fields.push(EditField::Status(status.parse::<UserStatus>().map_err(AppError::from)?));
    }
    if let Some(photo) = args.photo {
        let url = manager.prepare_photo_arg(&photo)?;
        fields.push(EditField::ProfilePhoto(Some(url)));
    } else if args.clear_photo {
        fields.push(EditField::ProfilePhoto(None));
    }

    Ok(fields)
}

/// Render rows as a fixed-width table
pub fn render_table(rows: &[&User]) -> String {
    if rows.is_empty() {
        return "No users found\n".to_string();
    }

    let name_width = column_width("NAME", rows.iter().map(|u| u.name.as_str()));
    let email_width = column_width("EMAIL", rows.iter().map(|u| u.email.as_str()));

    let mut out = format!(
        "{:<36}  {:<name_width$}  {:<email_width$}  {:<5}  {:<8}  PHOTO\n",
        "ID", "NAME", "EMAIL", "ROLE", "STATUS"
    );
    for user in rows {
        out.push_str(&format!(
            "{:<36}  {:<name_width$}  {:<email_width$}  {:<5}  {:<8}  {}\n",
            user.id,
            user.name,
            user.email,
            user.role.as_str(),
            user.status.as_str(),
            if user.has_photo() { "yes" } else { "-" },
        ));
    }
    out
}

pub fn render_stats(stats: &UserStats) -> String {
    format!(
        "Total users:    {}\nActive users:   {}\nInactive users: {}\n",
        stats.total, stats.active, stats.inactive
    )
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
