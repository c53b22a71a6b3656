/// Run-length encodes `message` as each character followed by the length of
/// its run, e.g. `"AAB"` becomes `"A2B1"`.
pub fn encode(message: &str) -> String {
    let mut encoded = String::new();
    let mut characters = message.chars().peekable();

    while let Some(character) = characters.next() {
        let mut count = 1;
        while characters.next_if_eq(&character).is_some() {
            count += 1;
        }
        encoded.push(character);
        encoded.push_str(&count.to_string());
    }

    encoded
}
