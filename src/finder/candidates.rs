//! Candidate file names for a view.
//!
//! Dots in a view name are directory separators, except that the final dot
//! may also introduce a literal file extension. So `emails.welcome.twig`
//! is tried as `emails/welcome.twig` first and then as
//! `emails/welcome/twig.<ext>` for each registered extension.

/// Build the ordered list of relative file names to check for `name`.
///
/// The first entry keeps the last dot and turns every earlier dot into `/`.
/// Then comes one entry per extension, in priority order, with every dot
/// turned into `/` and `.{extension}` appended.
pub fn possible_view_files(name: &str, extensions: &[String]) -> Vec<String> {
    let mut files = Vec::with_capacity(extensions.len() + 1);
    files.push(literal_file(name));

    let base = name.replace('.', "/");
    files.extend(extensions.iter().map(|ext| format!("{}.{}", base, ext)));

    files
}

fn literal_file(name: &str) -> String {
    match name.rfind('.') {
        Some(last) => format!("{}{}", name[..last].replace('.', "/"), &name[last..]),
        None => name.to_string(),
    }
}
