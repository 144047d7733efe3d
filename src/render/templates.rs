//! Built-in Swift templates.

pub const COLOR_SWIFT: &str = "Color.swift";
pub const COLOR_SWIFTUI: &str = "Color+SwiftUI.swift";
pub const FONT_EXTENSION: &str = "UIFont+extension.swift";
pub const TEXT_STYLES: &str = "TextStyle.swift";

/// Header shared by every generated file.
const HEADER: &str = r#"//
// Generated by tokenport.
// Do not edit this file by hand; changes are overwritten on the next export.
//
"#;

const COLOR_SWIFT_SOURCE: &str = r#"{% include "header" %}
import UIKit
{% if use_asset_catalog and bundle == "BundleProvider.bundle" %}
private final class BundleProvider {
    static let bundle = Bundle(for: BundleProvider.self)
}
{% endif %}
public extension UIColor {
{%- for color in colors %}
{%- if use_asset_catalog %}
    static var {{ color.name | identifier }}: UIColor {
        UIColor(named: {{ color.asset_name | swift_string }}, in: {{ bundle }}, compatibleWith: nil)!
    }
{%- elif color.dark %}
    static var {{ color.name | identifier }}: UIColor {
        UIColor { traitCollection -> UIColor in
            if traitCollection.userInterfaceStyle == .dark {
                return UIColor(red: {{ color.dark.red }}, green: {{ color.dark.green }}, blue: {{ color.dark.blue }}, alpha: {{ color.dark.alpha }})
            } else {
                return UIColor(red: {{ color.light.red }}, green: {{ color.light.green }}, blue: {{ color.light.blue }}, alpha: {{ color.light.alpha }})
            }
        }
    }
{%- else %}
    static var {{ color.name | identifier }}: UIColor {
        UIColor(red: {{ color.light.red }}, green: {{ color.light.green }}, blue: {{ color.light.blue }}, alpha: {{ color.light.alpha }})
    }
{%- endif %}
{%- endfor %}
}
"#;

const COLOR_SWIFTUI_SOURCE: &str = r#"{% include "header" %}
import SwiftUI
{% if use_asset_catalog and bundle == "BundleProvider.bundle" %}
private final class BundleProvider {
    static let bundle = Bundle(for: BundleProvider.self)
}
{% endif %}
public extension Color {
{%- for color in colors %}
{%- if use_asset_catalog %}
    static var {{ color.name | identifier }}: Color { Color({{ color.asset_name | swift_string }}, bundle: {{ bundle }}) }
{%- else %}
    static var {{ color.name | identifier }}: Color { Color(UIColor.{{ color.name | identifier }}) }
{%- endif %}
{%- endfor %}
}
"#;

const FONT_EXTENSION_SOURCE: &str = r#"{% include "header" %}
import UIKit

public extension UIFont {
{% for style in styles %}
    static func {{ style.name | identifier }}() -> UIFont {
        customFont({{ style.font.name | swift_string }}, size: {{ style.font.size | swift_float }})
    }
{% endfor %}
    private static func customFont(_ name: String, size: CGFloat) -> UIFont {
        guard let font = UIFont(name: name, size: size) else {
            print("Warning: Font \(name) not found.")
            return UIFont.systemFont(ofSize: size, weight: .regular)
        }
        return font
    }
}
"#;

// Self-contained: fonts are created here rather than through the UIFont
// extension, which may not be generated.
const TEXT_STYLES_SOURCE: &str = r#"{% include "header" %}
import UIKit

public enum TextCase {
    case original
    case uppercased
    case lowercased
}

public struct TextStyle {
    public let font: UIFont
    public let lineHeightMultiple: CGFloat?
    public let lineBreakMode: NSLineBreakMode?
    public let alignment: NSTextAlignment?
    public let strikethrough: NSUnderlineStyle?
    public let underline: NSUnderlineStyle?
    public let letterSpacing: CGFloat?
    public let textCase: TextCase?

    /// Attributes for an attributed string; arguments override the style's own values.
    public func attributes(
        alignment: NSTextAlignment? = nil,
        lineBreakMode: NSLineBreakMode? = nil
    ) -> [NSAttributedString.Key: Any] {
        let paragraph = NSMutableParagraphStyle()
        if let lineHeightMultiple = lineHeightMultiple {
            paragraph.lineHeightMultiple = lineHeightMultiple
        }
        if let mode = lineBreakMode ?? self.lineBreakMode {
            paragraph.lineBreakMode = mode
        }
        if let alignment = alignment ?? self.alignment {
            paragraph.alignment = alignment
        }
        var attributes: [NSAttributedString.Key: Any] = [
            .font: font,
            .paragraphStyle: paragraph,
        ]
        if let strikethrough = strikethrough {
            attributes[.strikethroughStyle] = strikethrough.rawValue
        }
        if let underline = underline {
            attributes[.underlineStyle] = underline.rawValue
        }
        if let letterSpacing = letterSpacing {
            attributes[.kern] = letterSpacing
        }
        return attributes
    }

    /// Applies the style's case transformation to `text`.
    public func transform(_ text: String) -> String {
        switch textCase {
        case .uppercased?:
            return text.uppercased()
        case .lowercased?:
            return text.lowercased()
        default:
            return text
        }
    }

    /// An attributed string of `text` in this style.
    public func attributedString(_ text: String) -> NSAttributedString {
        NSAttributedString(string: transform(text), attributes: attributes())
    }

    static func makeFont(_ name: String, size: CGFloat) -> UIFont {
        UIFont(name: name, size: size) ?? UIFont.systemFont(ofSize: size, weight: .regular)
    }

    static func multiple(lineHeight: CGFloat, for font: UIFont) -> CGFloat {
        ((100 * lineHeight) / font.lineHeight) / 100
    }
}

public extension TextStyle {
{%- for style in styles %}
    static let {{ style.name | identifier }}: TextStyle = {
        let font = TextStyle.makeFont({{ style.font.name | swift_string }}, size: {{ style.font.size | swift_float }})
        return TextStyle(
            font: font,
{%- if style.runtime_line_height is not none %}
            lineHeightMultiple: TextStyle.multiple(lineHeight: {{ style.runtime_line_height | swift_float }}, for: font),
{%- else %}
            lineHeightMultiple: {{ style.line_height_multiple | swift_float }},
{%- endif %}
            lineBreakMode: {{ style.line_break_mode | swift_case }},
            alignment: {{ style.alignment | swift_case }},
            strikethrough: {{ style.strikethrough | swift_case }},
            underline: {{ style.underline | swift_case }},
            letterSpacing: {{ style.letter_spacing | swift_float }},
            textCase: {{ style.text_case | swift_case }}
        )
    }()
{%- endfor %}
}
"#;

/// Every built-in template, by name.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("header", HEADER),
    (COLOR_SWIFT, COLOR_SWIFT_SOURCE),
    (COLOR_SWIFTUI, COLOR_SWIFTUI_SOURCE),
    (FONT_EXTENSION, FONT_EXTENSION_SOURCE),
    (TEXT_STYLES, TEXT_STYLES_SOURCE),
];
