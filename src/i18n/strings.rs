//! Bundled label tables

pub(super) static EN: &[(&str, &str)] = &[
    ("panel_title", "Ha Finance Record"),
    ("accounts", "Accounts"),
    ("balance", "Balance"),
    ("last_transaction", "Last transaction"),
    ("all_records", "All Records"),
    ("transactions", "Transactions"),
    ("recurring_plans", "Recurring Plans"),
    ("account_management", "Account Management"),
    ("add_transaction", "Add Transaction"),
    ("add_plan", "Add Plan"),
    ("amount", "Amount"),
    ("note", "Note"),
    ("type", "Type"),
    ("date", "Date"),
    ("filter", "Filter"),
    ("search", "Search"),
    ("all", "All"),
    ("manual", "Manual"),
    ("recurring", "Recurring"),
    ("adjustment", "Adjustment"),
    ("income", "Income"),
    ("expenses", "Expenses"),
    ("title", "Title"),
    ("frequency", "Frequency"),
    ("day", "Day"),
    ("month", "Month"),
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
    ("yearly", "Yearly"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("delete", "Delete"),
    ("edit", "Edit"),
    ("next_date", "Next"),
    ("no_transactions", "No transactions yet"),
    ("no_plans", "No recurring plans yet"),
    ("no_data", "No chart data available"),
    ("select_account", "Select account"),
    ("confirm_delete", "Are you sure you want to delete this?"),
    ("add_account", "Add Account"),
    ("edit_account", "Edit Account"),
    ("delete_account", "Delete Account"),
    ("account_name", "Account Name"),
    ("initial_balance", "Initial Balance"),
    ("create", "Create"),
    (
        "delete_warning",
        "This will permanently delete this account and all its transactions and plans.",
    ),
    ("type_to_confirm", "Type the account name to confirm:"),
    ("no_accounts", "No accounts yet. Add your first account!"),
    ("account_notes", "Account Notes"),
    ("adjust_balance", "Adjust Balance"),
    ("adjustment_amount", "Adjustment Amount"),
    ("adjustment_reason", "Adjustment Reason"),
    ("current_balance", "Current Balance"),
    ("new_balance", "New Balance"),
    ("start_date", "Start Date"),
    ("end_date", "End Date"),
    ("loading", "Loading..."),
    ("chart", "Income vs Expenses"),
];

pub(super) static ZH_HANT: &[(&str, &str)] = &[
    ("panel_title", "財務記錄"),
    ("accounts", "帳戶"),
    ("balance", "餘額"),
    ("last_transaction", "最近交易"),
    ("all_records", "總合紀錄"),
    ("transactions", "交易記錄"),
    ("recurring_plans", "定期項目"),
    ("account_management", "帳戶管理"),
    ("add_transaction", "新增交易"),
    ("add_plan", "新增項目"),
    ("amount", "金額"),
    ("note", "備註"),
    ("type", "類型"),
    ("date", "日期"),
    ("filter", "篩選"),
    ("search", "搜尋"),
    ("all", "全部"),
    ("manual", "手動"),
    ("recurring", "定期"),
    ("adjustment", "調整"),
    ("income", "收入"),
    ("expenses", "支出"),
    ("title", "標題"),
    ("frequency", "頻率"),
    ("day", "日期"),
    ("month", "月份"),
    ("active", "啟用"),
    ("inactive", "停用"),
    ("daily", "每日"),
    ("weekly", "每週"),
    ("monthly", "每月"),
    ("yearly", "每年"),
    ("save", "儲存"),
    ("cancel", "取消"),
    ("delete", "刪除"),
    ("edit", "編輯"),
    ("next_date", "下次"),
    ("no_transactions", "尚無交易記錄"),
    ("no_plans", "尚無定期項目"),
    ("no_data", "無圖表資料"),
    ("select_account", "選擇帳戶"),
    ("confirm_delete", "確定要刪除嗎？"),
    ("add_account", "新增帳戶"),
    ("edit_account", "編輯帳戶"),
    ("delete_account", "刪除帳戶"),
    ("account_name", "帳戶名稱"),
    ("initial_balance", "初始餘額"),
    ("create", "建立"),
    ("delete_warning", "這將永久刪除此帳戶及其所有交易和定期項目。"),
    ("type_to_confirm", "輸入帳戶名稱以確認："),
    ("no_accounts", "尚無帳戶。新增您的第一個帳戶！"),
    ("account_notes", "帳戶備註"),
    ("adjust_balance", "調整餘額"),
    ("adjustment_amount", "調整金額"),
    ("adjustment_reason", "調整原因"),
    ("current_balance", "目前餘額"),
    ("new_balance", "調整後餘額"),
    ("start_date", "開始日期"),
    ("end_date", "結束日期"),
    ("loading", "載入中..."),
    ("chart", "收入與支出"),
];

pub(super) static ZH_HANS: &[(&str, &str)] = &[
    ("panel_title", "财务记录"),
    ("accounts", "账户"),
    ("balance", "余额"),
    ("last_transaction", "最近交易"),
    ("all_records", "总合记录"),
    ("transactions", "交易记录"),
    ("recurring_plans", "定期项目"),
    ("account_management", "账户管理"),
    ("add_transaction", "新增交易"),
    ("add_plan", "新增项目"),
    ("amount", "金额"),
    ("note", "备注"),
    ("type", "类型"),
    ("date", "日期"),
    ("filter", "筛选"),
    ("search", "搜索"),
    ("all", "全部"),
    ("manual", "手动"),
    ("recurring", "定期"),
    ("adjustment", "调整"),
    ("income", "收入"),
    ("expenses", "支出"),
    ("title", "标题"),
    ("frequency", "频率"),
    ("day", "日期"),
    ("month", "月份"),
    ("active", "启用"),
    ("inactive", "停用"),
    ("daily", "每日"),
    ("weekly", "每周"),
    ("monthly", "每月"),
    ("yearly", "每年"),
    ("save", "保存"),
    ("cancel", "取消"),
    ("delete", "删除"),
    ("edit", "编辑"),
    ("next_date", "下次"),
    ("no_transactions", "暂无交易记录"),
    ("no_plans", "暂无定期项目"),
    ("no_data", "无图表数据"),
    ("select_account", "选择账户"),
    ("confirm_delete", "确定要删除吗？"),
    ("add_account", "新增账户"),
    ("edit_account", "编辑账户"),
    ("delete_account", "删除账户"),
    ("account_name", "账户名称"),
    ("initial_balance", "初始余额"),
    ("create", "创建"),
    ("delete_warning", "这将永久删除此账户及其所有交易和定期项目。"),
    ("type_to_confirm", "输入账户名称以确认："),
    ("no_accounts", "暂无账户。添加您的第一个账户！"),
    ("account_notes", "账户备注"),
    ("adjust_balance", "调整余额"),
    ("adjustment_amount", "调整金额"),
    ("adjustment_reason", "调整原因"),
    ("current_balance", "当前余额"),
    ("new_balance", "调整后余额"),
    ("start_date", "开始日期"),
    ("end_date", "结束日期"),
    ("loading", "加载中..."),
    ("chart", "收入与支出"),
];
