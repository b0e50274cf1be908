use anyhow::{ensure, Context};

use crate::models::product::Product;
use crate::models::quiz::Quiz;

const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
const QUIZ_JSON: &str = include_str!("../../data/quiz.json");

/// 进程启动时加载一次的静态数据，之后只读共享
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub products: Vec<Product>,
    pub quiz: Quiz,
}

impl Fixtures {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_json(PRODUCTS_JSON, QUIZ_JSON)
    }

    pub fn from_json(products_json: &str, quiz_json: &str) -> anyhow::Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(products_json).context("failed to parse product fixtures")?;
        let quiz: Quiz = serde_json::from_str(quiz_json).context("failed to parse quiz fixture")?;

        // 正确答案必须出现在选项中
        for question in &quiz.questions {
            ensure!(
                question.options.contains(&question.correct_answer),
                "quiz question {} has a correct answer outside its options",
                question.id
            );
        }

        Ok(Self { products, quiz })
    }
}
