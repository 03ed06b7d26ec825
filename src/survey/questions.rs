//! The fixed survey definition.
//!
//! Sixteen questions in display order: fourteen single-choice, one
//! multi-choice (q15) and one ranked-choice (q16) where respondents pick and
//! order exactly three of the four options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Single,
    Multi,
    Ranked,
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u8,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    /// `(code, label)` pairs; slice order is the rendering order.
    pub options: &'static [(char, &'static str)],
}

/// Number of rank slots on the ranked-choice question.
pub const RANK_SLOTS: usize = 3;

impl Question {
    /// Answer key used in submissions and stored responses (`q<id>`).
    pub fn key(&self) -> String {
        format!("q{}", self.id)
    }

    pub fn has_option(&self, code: &str) -> bool {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.options.iter().any(|(option, _)| *option == c),
            _ => false,
        }
    }
}

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question(id: u8) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

static QUESTIONS: [Question; 16] = [
    Question {
        id: 1,
        prompt: "1. 课余时间，你更喜欢通过以下哪种方式打发时间：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "去健身或运动一下"),
            ('B', "跟朋友一起找家餐厅吃饭"),
            ('C', "去跳舞教室跳一小时"),
            ('D', "在家上网买steam游戏开黑"),
        ],
    },
    Question {
        id: 2,
        prompt: "2. 你更喜欢哪种类型的音乐：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "流行"),
            ('B', "轻音乐"),
            ('C', "Kpop"),
            ('D', "嘻哈/说唱"),
        ],
    },
    Question {
        id: 3,
        prompt: "3. 你更喜欢待在哪种地方：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "热闹的party"),
            ('B', "一个人在房间独处"),
            ('C', "户外公园"),
            ('D', "街头的咖啡店"),
        ],
    },
    Question {
        id: 4,
        prompt: "4. 你在群体中更倾向扮演什么角色：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "领头的羊"),
            ('B', "远见的鹰"),
            ('C', "敏捷的豹"),
            ('D', "善战的狼"),
        ],
    },
    Question {
        id: 5,
        prompt: "5. 你更希望尝试哪种新的活动：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "桌游"),
            ('B', "烹饪"),
            ('C', "体育"),
            ('D', "舞蹈"),
        ],
    },
    Question {
        id: 6,
        prompt: "6. 你觉得自己最闪光的特点是：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "组织能力和行动力"),
            ('B', "烹饪技能和审美敏感"),
            ('C', "节奏感和表现力"),
            ('D', "信息搜集与优化生活方式的能力"),
        ],
    },
    Question {
        id: 7,
        prompt: "7. 你更想要学会哪种新技能：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "新的语种"),
            ('B', "一项运动"),
            ('C', "一种艺术（例如摄影，DIY）"),
            ('D', "一个生活技能"),
        ],
    },
    Question {
        id: 8,
        prompt: "8. 周五的晚上你更想要做什么：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "和朋友小酌"),
            ('B', "去gym练到趴"),
            ('C', "一本好书或一部电影，和无人打扰的清闲"),
            ('D', "K歌到半夜"),
        ],
    },
    Question {
        id: 9,
        prompt: "9. 你手机里最多的APP类型是：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "音乐/运动记录类"),
            ('B', "美食探店/做菜类"),
            ('C', "舞蹈剪辑/Kpop社区"),
            ('D', "Steam/购物/社交娱乐类"),
        ],
    },
    Question {
        id: 10,
        prompt: "10. 你的朋友觉得你是个什么样的人：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "活力运动型，全能社交选手"),
            ('B', "烹饪达人 + 吃喝开心果"),
            ('C', "爱跳爱唱+热爱舞台的人"),
            ('D', "什么都懂一点的生活小百科"),
        ],
    },
    Question {
        id: 11,
        prompt: "11. 下面哪句话最符合你的座右铭：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "“生活就要有节奏和律动”"),
            ('B', "“吃饱才有力气搞事”"),
            ('C', "“跳舞不止是爱好，是热情的表达”"),
            ('D', "“聪明地生活才能玩得更开心”"),
        ],
    },
    Question {
        id: 12,
        prompt: "12. 你和哪种颜色最有共鸣：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "活力跳跃的多巴胺"),
            ('B', "平静柔和的浅色系"),
            ('C', "自然/户外的色调"),
            ('D', "单色或中性"),
        ],
    },
    Question {
        id: 13,
        prompt: "13. 如果可以时空穿越，你最想和谁见面：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "一位创造历史的伟人"),
            ('B', "曾经的朋友"),
            ('C', "虚拟世界的挚友"),
            ('D', "原始部落"),
        ],
    },
    Question {
        id: 14,
        prompt: "14. 如果只能带一样东西搬进新家，你会带：",
        kind: QuestionKind::Single,
        options: &[
            ('A', "调酒工具"),
            ('B', "炒锅和调料套装"),
            ('C', "音响"),
            ('D', "游戏机"),
        ],
    },
    Question {
        id: 15,
        prompt: "15. 加入Family Program，你希望和家人们做这些事情（多选）：",
        kind: QuestionKind::Multi,
        options: &[
            ('A', "烹饪/做甜点，拿捏溅起的油花，复刻家里的味道！"),
            ('B', "健身/打球，重塑健康的身体，做球场上的将军！"),
            ('C', "跳舞，感受律动的美妙，伴随鼓点的起伏！"),
            ('D', "探店，打卡角落里的惊喜，常驻UVA大众点评！"),
            ('E', "桌游/扑克，用牌局上的热情，打出生活的天王炸！"),
            ('F', "欣赏/创作音乐，让旋律在心尖起舞，让艺术在指尖跳跃！"),
            ('G', "K歌，激活话筒，让大脑开机，唱它个三天三夜！"),
            ('H', "游戏/电竞，手速即正义，意识即王道！"),
            ('I', "小酌，在酒精里找灵感，只为一点点恰到好处的松弛！"),
        ],
    },
    Question {
        id: 16,
        prompt: "16. 你最想去的三个Family是（按排名）：",
        kind: QuestionKind::Ranked,
        options: &[
            ('A', "CC蛋炒饭"),
            ('B', "MAScara"),
            ('C', "快乐无限大本营"),
            ('D', "落日派对"),
        ],
    },
];
