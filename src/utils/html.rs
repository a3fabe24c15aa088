use ammonia;

/// Clean user-supplied HTML using the ammonia library.
///
/// Whitelist-based: safe inline tags survive, `<script>`, `<iframe>` and
/// event-handler attributes are removed. Comment bodies go through this
/// before they enter the ledger.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
