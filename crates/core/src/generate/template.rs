/// Default rule class body, written when the generation service is
/// unavailable. Mirrors the host framework's stock rule stub.
const RULE_STUB: &str = r#"<?php

namespace App\Rules;

use Closure;
use Illuminate\Contracts\Validation\ValidationRule;

class {{ class }} implements ValidationRule
{
    /**
     * Run the validation rule.
     */
    public function validate(string $attribute, mixed $value, Closure $fail): void
    {
        //
    }
}
"#;

/// Render the fallback rule stub for the given class name.
pub fn render_rule_stub(class_name: &str) -> String {
    RULE_STUB.replace("{{ class }}", class_name)
}
