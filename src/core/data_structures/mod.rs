/*!
 * Data Structures
 *
 * Specialized data structures shared by the parameter store and the
 * signal registry:
 * - Inline strings for map keys (signal names, parameter keys)
 */

mod inline_string;

pub use inline_string::InlineString;
