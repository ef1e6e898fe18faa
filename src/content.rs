//! 站点静态内容：导航、首屏、优势、课程、师资、赛事数据

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "首页", href: "#hero" },
    NavLink { label: "核心优势", href: "#features" },
    NavLink { label: "课程体系", href: "#courses" },
    NavLink { label: "师资团队", href: "#teachers" },
    NavLink { label: "综评赛事", href: "#competitions" },
    NavLink { label: "联系我们", href: "#contact" },
];

pub const PHONE_NUMBER: &str = "183-0198-0613";
pub const WECHAT_ID: &str = "farawaywei";
pub const CONTACT_EMAIL: &str = "contact@yijiankechuang.com";
pub const ADDRESS: &str = "上海市（详情咨询）";

pub static HERO_TAGS: [&str; 4] = ["AI编程", "软件开发", "硬件创新", "综评指导"];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub static HERO_STATS: [Stat; 4] = [
    Stat { number: "5+", label: "资深教师", desc: "平均10年教学经验" },
    Stat { number: "100+", label: "学员成果", desc: "综评成功案例" },
    Stat { number: "3", label: "核心方向", desc: "AI/软件/硬件" },
    Stat { number: "10+", label: "合作赛事", desc: "高含金量比赛" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "👥",
        title: "大咖团队",
        subtitle: "智慧研发",
        description: "算法工程师、复旦博士、AI研究专家组成的顶级师资团队",
        accent: "#3b82f6",
    },
    Feature {
        icon: "📖",
        title: "科学课程",
        subtitle: "系统学习",
        description: "Python、C++、人工智能，循序渐进的完整课程体系",
        accent: "#f97316",
    },
    Feature {
        icon: "🔌",
        title: "软硬结合",
        subtitle: "项目制教学",
        description: "软硬件结合实战，早早驾驭人工智能核心技术",
        accent: "#a855f7",
    },
    Feature {
        icon: "💡",
        title: "跨学科",
        subtitle: "多元发展",
        description: "融合多学科知识，培养综合创新能力",
        accent: "#22c55e",
    },
    Feature {
        icon: "🤖",
        title: "AIGC融入",
        subtitle: "AI学习助手",
        description: "提前配备人工智能学习助手，领先一步掌握未来技能",
        accent: "#06b6d4",
    },
    Feature {
        icon: "🏆",
        title: "大赛直通车",
        subtitle: "背景提升",
        description: "直通高含金量科创赛事，助力综评背景提升",
        accent: "#ef4444",
    },
];

pub struct CourseLevel {
    pub name: &'static str,
    pub age: &'static str,
    pub focus: &'static str,
}

pub struct Course {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
    pub levels: [CourseLevel; 4],
    pub features: [&'static str; 4],
}

pub static COURSES: [Course; 3] = [
    Course {
        icon: "🤖",
        title: "人工智能",
        subtitle: "Python AI",
        description: "从Python基础到人工智能应用，系统学习AI编程",
        accent: "#1e3c8b",
        levels: [
            CourseLevel { name: "Python AI 1", age: "9-10岁", focus: "基础构建与编程入门" },
            CourseLevel { name: "Python AI 2", age: "10-12岁", focus: "深化编程与AI基础" },
            CourseLevel { name: "Python AI 3", age: "11-13岁", focus: "AI深入与项目实践" },
            CourseLevel { name: "Python AI 4", age: "12-14岁", focus: "AI高阶与跨学科拓展" },
        ],
        features: ["Python语法基础", "数据结构算法", "机器学习入门", "AI项目实战"],
    },
    Course {
        icon: "💻",
        title: "软件编程",
        subtitle: "C++ / Scratch",
        description: "信奥C++编程，为信息学竞赛打下坚实基础",
        accent: "#f58220",
        levels: [
            CourseLevel { name: "C++ 基础", age: "10-12岁", focus: "语法与基础算法" },
            CourseLevel { name: "C++ 进阶", age: "11-13岁", focus: "数据结构进阶" },
            CourseLevel { name: "信奥冲刺", age: "12-15岁", focus: "竞赛算法强化" },
            CourseLevel { name: "竞赛实战", age: "13-16岁", focus: "NOIP/CSP冲刺" },
        ],
        features: ["C++核心语法", "算法与数据结构", "信奥竞赛辅导", "NOIP/CSP备考"],
    },
    Course {
        icon: "🔧",
        title: "硬件创新",
        subtitle: "Arduino / 物联网",
        description: "软硬件结合，动手实践创造智能作品",
        accent: "#10b981",
        levels: [
            CourseLevel { name: "硬件入门", age: "9-11岁", focus: "电子基础与传感器" },
            CourseLevel { name: "Arduino", age: "10-12岁", focus: "编程控制硬件" },
            CourseLevel { name: "物联网", age: "11-13岁", focus: "智能互联项目" },
            CourseLevel { name: "创新设计", age: "12-15岁", focus: "综合项目开发" },
        ],
        features: ["电子电路基础", "传感器应用", "物联网开发", "智能硬件设计"],
    },
];

pub struct Teacher {
    pub name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub details: [&'static str; 4],
    pub accent: &'static str,
}

pub static TEACHERS: [Teacher; 5] = [
    Teacher {
        name: "简老师",
        title: "算法工程师",
        icon: "⌨️",
        description: "资深算法工程师，多年一线开发经验",
        details: [
            "前阿里巴巴高级算法工程师",
            "ACM-ICPC亚洲区域赛银牌",
            "8年编程教学经验",
            "擅长算法与数据结构",
        ],
        accent: "#1e3c8b",
    },
    Teacher {
        name: "李老师",
        title: "复旦博士",
        icon: "🎓",
        description: "复旦大学计算机博士，学术研究深厚",
        details: [
            "复旦大学计算机科学博士",
            "发表SCI论文10余篇",
            "国家自然科学基金项目参与人",
            "专注人工智能教育研究",
        ],
        accent: "#f58220",
    },
    Teacher {
        name: "于老师",
        title: "AI研究专家",
        icon: "🏅",
        description: "人工智能领域专家，前沿技术引领者",
        details: [
            "前百度AI研究院研究员",
            "深度学习领域专家",
            "多项AI专利发明人",
            "Kaggle竞赛金牌选手",
        ],
        accent: "#10b981",
    },
    Teacher {
        name: "罗老师",
        title: "大厂工程师",
        icon: "💼",
        description: "头部互联网企业资深工程师",
        details: [
            "前腾讯高级软件工程师",
            "全栈开发技术专家",
            "微服务架构设计者",
            "6年青少年编程教育经验",
        ],
        accent: "#8b5cf6",
    },
    Teacher {
        name: "陈老师",
        title: "商业分析师",
        icon: "📈",
        description: "数据科学与商业分析专家",
        details: [
            "前麦肯锡数据分析师",
            "数据科学领域专家",
            "商业智能系统架构师",
            "擅长数据可视化教学",
        ],
        accent: "#ec4899",
    },
];

pub struct Competition {
    pub name: &'static str,
    pub organizer: &'static str,
    pub level: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub benefits: [&'static str; 3],
    pub icon: &'static str,
    pub accent: &'static str,
}

pub static COMPETITIONS: [Competition; 6] = [
    Competition {
        name: "全国青少年科技创新大赛",
        organizer: "中国科协青少年科技中心",
        level: "国家级",
        category: "科技创新",
        description: "国内最具影响力的青少年科技竞赛之一",
        benefits: ["综评加分", "升学优势", "创新能力证明"],
        icon: "🏆",
        accent: "#f58220",
    },
    Competition {
        name: "蓝桥杯全国软件大赛",
        organizer: "工信部人才交流中心",
        level: "国家级",
        category: "编程竞赛",
        description: "国内领先的IT学科赛事",
        benefits: ["编程能力认证", "企业认可", "综评加分"],
        icon: "🥇",
        accent: "#1e3c8b",
    },
    Competition {
        name: "WRC世界机器人大会",
        organizer: "中国电子学会",
        level: "国际级",
        category: "机器人",
        description: "世界级机器人竞技平台",
        benefits: ["国际视野", "技术认证", "综评加分"],
        icon: "⭐",
        accent: "#10b981",
    },
    Competition {
        name: "全球青少年人工智能算法挑战",
        organizer: "中国人工智能学会",
        level: "国际级",
        category: "人工智能",
        description: "AI领域顶级青少年赛事",
        benefits: ["AI能力认证", "国际认可", "综评加分"],
        icon: "🎖️",
        accent: "#8b5cf6",
    },
    Competition {
        name: "宋庆龄少年儿童发明奖",
        organizer: "中国宋庆龄基金会",
        level: "国家级",
        category: "发明创造",
        description: "培养创新精神和实践能力的权威赛事",
        benefits: ["创新能力证明", "综评加分", "荣誉认证"],
        icon: "🏆",
        accent: "#ec4899",
    },
    Competition {
        name: "中国电子学会编程等级考试",
        organizer: "中国电子学会",
        level: "国家级",
        category: "等级认证",
        description: "权威的编程能力等级认证",
        benefits: ["能力认证", "学习路径", "综评参考"],
        icon: "🥇",
        accent: "#06b6d4",
    },
];

pub static FOOTER_COURSES: [&str; 5] = [
    "Python人工智能",
    "C++软件编程",
    "Arduino硬件",
    "物联网开发",
    "信奥竞赛辅导",
];
