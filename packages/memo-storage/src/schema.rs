pub fn render_schema(notes_table: &str, counter_table: &str) -> String {
	let init = include_str!("../../../sql/init.sql");
	let expanded = expand_includes(init);

	expanded.replace("<NOTES_TABLE>", notes_table).replace("<COUNTER_TABLE>", counter_table)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_notes.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_notes.sql")),
				"tables/002_counter.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_counter.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_both_tables_with_their_names() {
		let sql = render_schema("notes_dev", "counter_dev");

		assert!(sql.contains("CREATE TABLE IF NOT EXISTS notes_dev ("));
		assert!(sql.contains("PRIMARY KEY (user_id, note_id)"));
		assert!(sql.contains("CREATE TABLE IF NOT EXISTS counter_dev ("));
		assert!(!sql.contains("<NOTES_TABLE>"));
		assert!(!sql.contains("\\ir "));
	}
}
