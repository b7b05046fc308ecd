//! Built-in keyword patterns, pooled per category.
//!
//! English and Chinese keyword groups are listed together; a category's score
//! counts matching patterns regardless of language. Patterns are unanchored,
//! so `fix` also matches inside `prefix`.

use crate::domain::TaskCategory;

/// Raw pattern sources for one category.
pub(super) struct PatternSource {
    pub category: TaskCategory,
    pub patterns: &'static [&'static str],
}

/// One entry per category, in tie-break order.
pub(super) const DEFAULT_PATTERNS: &[PatternSource] = &[
    PatternSource {
        category: TaskCategory::BugFix,
        patterns: &[
            r"(fix|bug|error|issue|problem|crash|fail)",
            r"(修复|错误|问题|故障|崩溃|失败)",
            r"(debug|debugging)",
            r"(not working|broken|incorrect)",
            r"(无法|不能|无效|失效)",
        ],
    },
    PatternSource {
        category: TaskCategory::FeatureDevelopment,
        patterns: &[
            r"(add|new|create|implement|build|develop)",
            r"(feature|functionality|capability|module|component)",
            r"(新增|添加|创建|实现|开发|构建)",
            r"(功能|特性|模块|组件|接口)",
            r"(enhancement|improvement|upgrade)",
            r"(增强|改进|升级|扩展)",
        ],
    },
    PatternSource {
        category: TaskCategory::Refactoring,
        patterns: &[
            r"(refactor|refactoring|restructure|reorganize)",
            r"(optimize|optimization|improve|clean)",
            r"(重构|重组|优化|改进|整理)",
            r"(code quality|performance|maintainability)",
            r"(代码质量|性能|可维护性)",
        ],
    },
    PatternSource {
        category: TaskCategory::Testing,
        patterns: &[
            r"(test|testing|unit test|integration test)",
            r"(测试|单元测试|集成测试|测试用例)",
            r"(coverage|test coverage|qa)",
            r"(覆盖率|测试覆盖率|质量保证)",
            r"(verify|validation|check)",
            r"(验证|校验|检查)",
        ],
    },
    PatternSource {
        category: TaskCategory::Documentation,
        patterns: &[
            r"(doc|docs|documentation|readme|guide)",
            r"(文档|说明|指南|手册)",
            r"(comment|comments|api doc)",
            r"(注释|api文档|接口文档)",
            r"(tutorial|example|demo)",
            r"(教程|示例|演示)",
        ],
    },
    PatternSource {
        category: TaskCategory::Research,
        patterns: &[
            r"(research|investigate|explore|study)",
            r"(调研|研究|探索|分析)",
            r"(poc|proof of concept|spike)",
            r"(原型|概念验证|技术验证)",
            r"(evaluation|comparison|analysis)",
            r"(评估|比较|分析)",
        ],
    },
    PatternSource {
        category: TaskCategory::Architecture,
        patterns: &[
            r"(architecture|design|structure|framework)",
            r"(架构|设计|结构|框架)",
            r"(system design|technical design)",
            r"(系统设计|技术设计)",
            r"(blueprint|plan|specification)",
            r"(蓝图|规划|规范)",
        ],
    },
    PatternSource {
        category: TaskCategory::Deployment,
        patterns: &[
            r"(deploy|deployment|release|publish)",
            r"(部署|发布|上线|发版)",
            r"(ci/cd|pipeline|build)",
            r"(环境|生产环境|服务器)",
            r"(docker|kubernetes|container)",
            r"(容器|容器化|编排)",
        ],
    },
    PatternSource {
        category: TaskCategory::Maintenance,
        patterns: &[
            r"(maintain|maintenance|update|upgrade)",
            r"(维护|更新|升级|迁移)",
            r"(security|vulnerability|patch)",
            r"(安全|漏洞|补丁)",
            r"(dependency|library|framework)",
            r"(依赖|库|框架)",
        ],
    },
];
