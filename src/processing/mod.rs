// ファイル単位の変換処理
// - blur.rs - ラスター画像のぼかし
// - svg.rs  - SVGの空ファイル化

pub mod blur;
pub mod svg;

// 公開API
pub use blur::BlurProcessor;
pub use svg::SvgReplacer;
