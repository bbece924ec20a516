//! 八个页面，每页一个独立的"表单 → 调用 → 渲染"循环
//!
//! 页面之间不共享状态（城市名和后端地址由命令行统一传入），
//! 单页失败只影响本页输出，不会中断进程。

pub mod anomalies;
pub mod chat;
pub mod eco_tips;
pub mod feedback;
pub mod kpi_chart;
pub mod policy;
pub mod summary;
pub mod sustainability;

/// 需要城市名的页面共用的校验：空值返回 None 并由页面给出提示
pub fn require_city(city: Option<&str>) -> Option<&str> {
    city.map(str::trim).filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_city_rejects_blank() {
        assert_eq!(require_city(None), None);
        assert_eq!(require_city(Some("")), None);
        assert_eq!(require_city(Some("   ")), None);
        assert_eq!(require_city(Some(" Paris ")), Some("Paris"));
    }
}
