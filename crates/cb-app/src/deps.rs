//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for router construction.
//! 路由器构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! **这不是 Builder 模式。**
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use cb_core::ports::{MessengerPort, SettingsStorePort, ThumbnailStorePort};

/// All ports the application layer needs. Every field is required.
/// 应用层所需的全部端口，每个字段都是必需的。
pub struct AppDeps {
    pub settings: Arc<dyn SettingsStorePort>,
    pub thumbs: Arc<dyn ThumbnailStorePort>,
    pub messenger: Arc<dyn MessengerPort>,
}
